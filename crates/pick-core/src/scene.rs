//! Scene contents: randomly generated spheres plus the markers placed by
//! picking. Spheres never change after generation; markers only accumulate.

use crate::bounds::Aabb;
use crate::constants::{
    SPHERE_CENTER_RANGE, SPHERE_COLOR_RANGE, SPHERE_DIFFUSE, SPHERE_RADIUS_RANGE,
    SPHERE_SPECULAR, SPHERE_SPECULAR_COLOR, SPHERE_SPECULAR_POWER,
};
use crate::marker::Marker;
use crate::ray::Ray;
use glam::Vec3;
use rand::prelude::*;

/// Surface shading parameters of a sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub diffuse_color: [f32; 3],
    pub diffuse: f32,
    pub specular: f32,
    pub specular_color: [f32; 3],
    pub specular_power: f32,
}

impl Material {
    pub fn with_diffuse_color(diffuse_color: [f32; 3]) -> Self {
        Self {
            diffuse_color,
            ..Self::default()
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_color: [1.0, 1.0, 1.0],
            diffuse: SPHERE_DIFFUSE,
            specular: SPHERE_SPECULAR,
            specular_color: SPHERE_SPECULAR_COLOR,
            specular_power: SPHERE_SPECULAR_POWER,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            material: Material::default(),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::around(self.center, self.radius)
    }
}

/// Nearest sphere struck by a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    pub sphere: usize,
    pub distance: f32,
    pub point: Vec3,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    markers: Vec<Marker>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` spheres with random centres, radii and colours drawn from `rng`.
    pub fn random<R: Rng>(count: usize, rng: &mut R) -> Self {
        let (c_lo, c_hi) = SPHERE_CENTER_RANGE;
        let (r_lo, r_hi) = SPHERE_RADIUS_RANGE;
        let (k_lo, k_hi) = SPHERE_COLOR_RANGE;
        let spheres = (0..count)
            .map(|_| {
                let center = Vec3::new(
                    rng.gen_range(c_lo..c_hi),
                    rng.gen_range(c_lo..c_hi),
                    rng.gen_range(c_lo..c_hi),
                );
                let radius = rng.gen_range(r_lo..r_hi);
                let color = [
                    rng.gen_range(k_lo..k_hi),
                    rng.gen_range(k_lo..k_hi),
                    rng.gen_range(k_lo..k_hi),
                ];
                Sphere {
                    center,
                    radius,
                    material: Material::with_diffuse_color(color),
                }
            })
            .collect();
        Self {
            spheres,
            markers: Vec::new(),
        }
    }

    /// Reproducible random scene.
    pub fn from_seed(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(count, &mut rng)
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub(crate) fn push_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Bounds of the pickable geometry only.
    pub fn sphere_bounds(&self) -> Aabb {
        self.spheres
            .iter()
            .fold(Aabb::EMPTY, |acc, s| acc.union(s.bounds()))
    }

    /// Bounds of everything drawn, markers included.
    pub fn bounds(&self) -> Aabb {
        self.markers
            .iter()
            .fold(self.sphere_bounds(), |acc, m| acc.union(m.bounds()))
    }

    /// Nearest sphere intersection along `ray`. Ties keep the lower index.
    pub fn raycast(&self, ray: &Ray) -> Option<SurfaceHit> {
        let mut best: Option<(usize, f32)> = None;
        for (i, sphere) in self.spheres.iter().enumerate() {
            if let Some(t) = ray.intersect_sphere(sphere.center, sphere.radius) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best.map(|(sphere, distance)| SurfaceHit {
            sphere,
            distance,
            point: ray.at(distance),
        })
    }
}
