use odds_form_core::{BannerView, FormViewModel, StatusKind};

use super::constants::*;

/// Renders one frame of the form as terminal lines.
pub fn render(view: &FormViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);
    lines.push(format!("=== {TITLE} ==="));
    lines.push(render_input(&view.input));
    lines.push(render_button(view));
    if let Some(banner) = &view.banner {
        lines.push(render_banner(banner));
    }
    lines
}

fn render_input(input: &str) -> String {
    if input.is_empty() {
        format!("{INPUT_LABEL}: {STYLE_DIM}{INPUT_PLACEHOLDER}{STYLE_RESET}")
    } else {
        format!("{INPUT_LABEL}: {input}")
    }
}

fn render_button(view: &FormViewModel) -> String {
    let label = if view.in_flight { BUTTON_BUSY } else { BUTTON_IDLE };
    if view.submit_enabled {
        format!("[ {label} ]")
    } else {
        format!("{STYLE_DIM}[ {label} ]{STYLE_RESET}")
    }
}

fn render_banner(banner: &BannerView) -> String {
    let style = match banner.kind {
        StatusKind::Info => STYLE_INFO,
        StatusKind::Success => STYLE_SUCCESS,
        StatusKind::Error => STYLE_ERROR,
    };
    format!("{style}{}{STYLE_RESET}", banner.text)
}
