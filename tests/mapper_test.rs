//! Tests for pointer-to-cell mapping.

use pointer_tictactoe::{Cell, SurfaceSize, map_to_cell};

#[test]
fn test_far_corner_is_bottom_right() {
    for (w, h) in [(3, 3), (600, 400), (1919, 1080), (u32::MAX, u32::MAX)] {
        let surface = SurfaceSize::new(w, h).unwrap();
        assert_eq!(map_to_cell(w - 1, h - 1, surface), Cell::new(2, 2));
    }
}

#[test]
fn test_third_boundaries() {
    let surface = SurfaceSize::new(600, 900).unwrap();
    assert_eq!(map_to_cell(199, 0, surface).col, 0);
    assert_eq!(map_to_cell(200, 0, surface).col, 1);
    assert_eq!(map_to_cell(399, 0, surface).col, 1);
    assert_eq!(map_to_cell(400, 0, surface).col, 2);
    assert_eq!(map_to_cell(0, 299, surface).row, 0);
    assert_eq!(map_to_cell(0, 300, surface).row, 1);
    assert_eq!(map_to_cell(0, 600, surface).row, 2);
}

#[test]
fn test_surface_method_matches_free_function() {
    let surface = SurfaceSize::new(123, 77).unwrap();
    for (x, y) in [(0, 0), (40, 25), (41, 26), (122, 76)] {
        assert_eq!(surface.cell_at(x, y), map_to_cell(x, y, surface));
    }
}

#[test]
fn test_malformed_surface_is_config_error() {
    let err = SurfaceSize::new(0, 0).unwrap_err();
    assert!(err.to_string().starts_with("Config error"));
}
