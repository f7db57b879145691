use super::config::LinkStyle;
use super::particle::Particle;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

/// Line opacity for two points `distance` apart.
///
/// Falls linearly from `max_alpha` at zero distance to nothing at `threshold`;
/// `None` means no line is drawn.
#[inline]
pub fn link_alpha(distance: f32, threshold: f32, max_alpha: f32) -> Option<f32> {
    if threshold > 0.0 && (0.0..threshold).contains(&distance) {
        Some((1.0 - distance / threshold) * max_alpha)
    } else {
        None
    }
}

/// Lines between every unordered pair of particles closer than `style.distance`.
///
/// O(n^2) over the batch; counts stay in the tens.
pub fn particle_links<'a>(
    particles: &'a [Particle],
    style: &'a LinkStyle,
) -> impl Iterator<Item = Link> + 'a {
    particles.iter().enumerate().flat_map(move |(i, a)| {
        particles[i + 1..].iter().filter_map(move |b| {
            let d = a.pos.distance(b.pos);
            link_alpha(d, style.distance, style.max_alpha).map(|alpha| Link {
                from: a.pos,
                to: b.pos,
                alpha,
            })
        })
    })
}

/// Lines from particles near the pointer to the pointer itself.
pub fn pointer_links<'a>(
    particles: &'a [Particle],
    pointer: Option<Vec2>,
    style: &'a LinkStyle,
) -> impl Iterator<Item = Link> + 'a {
    pointer.into_iter().flat_map(move |p| {
        particles.iter().filter_map(move |a| {
            let d = a.pos.distance(p);
            link_alpha(d, style.distance, style.max_alpha).map(|alpha| Link {
                from: a.pos,
                to: p,
                alpha,
            })
        })
    })
}
