#![allow(dead_code)]

use coloc_core::channel::{Channel, Plane};
use ndarray::Array2;

/// Single-row plane from a list of intensities.
pub fn row_plane(values: &[u16]) -> Plane {
    Array2::from_shape_vec((1, values.len()), values.to_vec()).expect("row shape")
}

/// Single-plane 8-bit channel holding one row of intensities.
pub fn row_channel(title: &str, values: &[u16]) -> Channel {
    Channel::from_plane(title, row_plane(values), 8).expect("valid channel")
}

/// Multi-plane 8-bit channel, one row of intensities per plane.
pub fn row_stack(title: &str, planes: &[&[u16]]) -> Channel {
    Channel::new(title, planes.iter().map(|p| row_plane(p)).collect(), 8).expect("valid channel")
}

/// Constant-valued channel.
pub fn flat_channel(title: &str, h: usize, w: usize, planes: usize, value: u16) -> Channel {
    Channel::new(
        title,
        (0..planes).map(|_| Array2::from_elem((h, w), value)).collect(),
        8,
    )
    .expect("valid channel")
}

/// Deterministic pseudo-random 8-bit stack (LCG), for property-style checks.
pub fn noise_channel(title: &str, h: usize, w: usize, planes: usize, seed: u32) -> Channel {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        ((state >> 24) & 0xff) as u16
    };
    let planes = (0..planes)
        .map(|_| Array2::from_shape_fn((h, w), |_| next()))
        .collect();
    Channel::new(title, planes, 8).expect("valid channel")
}
