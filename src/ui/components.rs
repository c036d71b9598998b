//! Reusable UI components
//!
//! Standalone render helpers used by the results views: circular score
//! gauges, the opportunity badge and issue chips.

use crate::theme;
use eframe::egui;

/// Color ramp for a 0-100 score. `inverted` means high is good (financial
/// health); otherwise high is bad (a strong SEO score is a weak prospect).
pub fn score_color(score: u32, inverted: bool) -> egui::Color32 {
    if inverted {
        match score {
            70.. => theme::STATUS_SUCCESS,
            40..=69 => theme::STATUS_WARNING,
            _ => theme::STATUS_ERROR,
        }
    } else {
        match score {
            70.. => theme::STATUS_ERROR,
            40..=69 => theme::STATUS_WARNING,
            _ => theme::STATUS_SUCCESS,
        }
    }
}

/// Circular score gauge with the value centered and a caption underneath
pub fn score_gauge(ui: &mut egui::Ui, score: u32, label: &str, inverted: bool) {
    let diameter = 44.0;
    let label_height = 14.0;
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(diameter, diameter + label_height),
        egui::Sense::hover(),
    );

    if !ui.is_rect_visible(rect) {
        return;
    }

    let center = egui::pos2(rect.center().x, rect.top() + diameter / 2.0);
    let radius = diameter / 2.0 - 3.0;
    let painter = ui.painter();

    // Track ring
    painter.circle_stroke(center, radius, egui::Stroke::new(4.0, theme::BG_SURFACE));

    // Value arc, from 12 o'clock clockwise
    let fraction = (score.min(100) as f32) / 100.0;
    if fraction > 0.0 {
        let segments = (48.0 * fraction).ceil().max(2.0) as usize;
        let start = -std::f32::consts::FRAC_PI_2;
        let sweep = fraction * std::f32::consts::TAU;
        let points: Vec<egui::Pos2> = (0..=segments)
            .map(|i| {
                let angle = start + sweep * (i as f32 / segments as f32);
                egui::pos2(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        painter.add(egui::epaint::PathShape::line(
            points,
            egui::Stroke::new(4.0, score_color(score, inverted)),
        ));
    }

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        score.to_string(),
        egui::FontId::proportional(13.0),
        theme::TEXT_PRIMARY,
    );
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - label_height / 2.0),
        egui::Align2::CENTER_CENTER,
        label.to_uppercase(),
        egui::FontId::proportional(8.0),
        theme::TEXT_MUTED,
    );
}

/// Pink opportunity badge: large value with a caption
pub fn opportunity_badge(ui: &mut egui::Ui, score: u32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(72.0, 58.0), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    painter.rect_filled(rect, theme::RADIUS_LARGE, theme::ACCENT);
    painter.rect_stroke(
        rect,
        theme::RADIUS_LARGE,
        egui::Stroke::new(1.0, theme::ACCENT_SOFT),
        egui::StrokeKind::Inside,
    );
    painter.text(
        egui::pos2(rect.center().x, rect.center().y - 6.0),
        egui::Align2::CENTER_CENTER,
        score.to_string(),
        egui::FontId::proportional(22.0),
        egui::Color32::WHITE,
    );
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 11.0),
        egui::Align2::CENTER_CENTER,
        "OPPORTUNITY",
        egui::FontId::proportional(7.0),
        theme::ACCENT_SOFT,
    );
}

/// Red-tinted pill for a single SEO issue finding
pub fn issue_chip(ui: &mut egui::Ui, text: &str) {
    let font = egui::FontId::proportional(theme::FONT_SMALL);
    let galley = ui
        .painter()
        .layout_no_wrap(text.to_string(), font, theme::STATUS_ERROR);
    let size = galley.size() + egui::vec2(20.0, 10.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    painter.rect_filled(
        rect,
        rect.height() / 2.0,
        egui::Color32::from_rgba_unmultiplied(0xef, 0x44, 0x44, 20),
    );
    painter.rect_stroke(
        rect,
        rect.height() / 2.0,
        egui::Stroke::new(
            1.0,
            egui::Color32::from_rgba_unmultiplied(0xef, 0x44, 0x44, 50),
        ),
        egui::StrokeKind::Inside,
    );
    painter.galley(
        rect.center() - galley.size() / 2.0,
        galley,
        theme::STATUS_ERROR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_ramp_rewards_high_scores() {
        assert_eq!(score_color(85, true), theme::STATUS_SUCCESS);
        assert_eq!(score_color(70, true), theme::STATUS_SUCCESS);
        assert_eq!(score_color(55, true), theme::STATUS_WARNING);
        assert_eq!(score_color(39, true), theme::STATUS_ERROR);
    }

    #[test]
    fn normal_ramp_flags_high_scores() {
        assert_eq!(score_color(85, false), theme::STATUS_ERROR);
        assert_eq!(score_color(40, false), theme::STATUS_WARNING);
        assert_eq!(score_color(10, false), theme::STATUS_SUCCESS);
    }
}
