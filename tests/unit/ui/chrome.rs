use super::*;
use crate::animation::spring::{SpringConfig, SpringState};

#[test]
fn presets_render_expected_css() {
    assert_eq!(NavChrome::TOP.background.to_css(), "rgba(17, 24, 39, 0.5)");
    assert_eq!(NavChrome::SCROLLED.background.to_css(), "rgba(17, 24, 39, 0.95)");
    assert_eq!(NavChrome::TOP.box_shadow_css(), "none");
    assert_eq!(
        NavChrome::SCROLLED.box_shadow_css(),
        "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)"
    );
    assert_eq!(NavChrome::TOP.backdrop_filter_css(), "blur(12px)");
    assert_eq!(MenuPresentation::CLOSED.transform_css(), "translateX(-100%)");
    assert_eq!(MenuPresentation::OPEN.transform_css(), "translateX(0%)");
}

#[test]
fn half_shadow_scales_both_layers() {
    let chrome = NavChrome {
        shadow: 0.5,
        ..NavChrome::SCROLLED
    };
    assert_eq!(
        chrome.box_shadow_css(),
        "0 4px 6px -1px rgba(0, 0, 0, 0.05), 0 2px 4px -1px rgba(0, 0, 0, 0.03)"
    );
}

#[test]
fn nav_spring_moves_every_channel_to_the_scrolled_preset() {
    let mut spring = SpringState::new("nav", NavChrome::TOP, SpringConfig::NAV_CHROME);
    spring.set_target(NavChrome::SCROLLED);
    for _ in 0..240 {
        spring.advance(1.0 / 60.0);
    }
    assert!(spring.is_resting());
    assert_eq!(spring.current(), NavChrome::SCROLLED);
}

#[test]
fn menu_spring_passes_through_intermediate_values() {
    let mut spring = SpringState::new("menu", MenuPresentation::CLOSED, SpringConfig::MOBILE_MENU);
    spring.set_target(MenuPresentation::OPEN);
    let mid = spring.advance(0.05);
    assert!(mid.translate_x_pct > -100.0 && mid.translate_x_pct < 0.0);
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
}
