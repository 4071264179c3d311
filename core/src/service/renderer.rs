use crate::model::palette::{Palette, Rgb};

/// Band inset, as a fraction of the smaller cell dimension.
pub const PAD_FRACTION: f64 = 0.035;
/// Day-label font size, as a fraction of the smaller cell dimension.
pub const FONT_FRACTION: f64 = 0.43;

/// Per-cell geometry handed down by the hosting widget: the cell
/// center and its full width/height, in whatever pixel-like units the
/// host draws in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandShape {
    pub rect: RectShape,
    pub fill: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
}

/// The scene for one day cell: incident band on top, risk band below,
/// day number centered over both.
#[derive(Debug, Clone, PartialEq)]
pub struct CellScene {
    pub incident_band: BandShape,
    pub risk_band: BandShape,
    pub label: DayLabel,
}

/// Build the scene for one cell. Pure function of its inputs: no
/// state, no I/O. Returns `None` when either count is NaN, in which
/// case the cell stays empty.
pub fn render_cell(
    geom: &CellGeometry,
    incidents: f64,
    risks: f64,
    day: u32,
    palette: &Palette,
) -> Option<CellScene> {
    if incidents.is_nan() || risks.is_nan() {
        return None;
    }

    let pad = PAD_FRACTION * geom.width.min(geom.height);
    let x0 = geom.center_x - geom.width / 2.0;
    let y0 = geom.center_y - geom.height / 2.0;
    let band_width = geom.width - 2.0 * pad;
    let band_height = geom.height / 2.0 - 2.0 * pad;

    let upper_fill = if incidents > 0.0 {
        palette.alert_incident
    } else {
        palette.neutral
    };
    let lower_fill = if risks > 0.0 {
        palette.alert_risk
    } else {
        palette.neutral
    };

    Some(CellScene {
        incident_band: BandShape {
            rect: RectShape {
                x: x0 + pad,
                y: y0 + pad,
                width: band_width,
                height: band_height,
            },
            fill: upper_fill,
        },
        risk_band: BandShape {
            rect: RectShape {
                x: x0 + pad,
                y: geom.center_y + pad,
                width: band_width,
                height: band_height,
            },
            fill: lower_fill,
        },
        label: DayLabel {
            x: geom.center_x,
            y: geom.center_y,
            text: format!("{:02}", day),
            font_size: FONT_FRACTION * geom.width.min(geom.height),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> CellGeometry {
        CellGeometry {
            center_x: 35.0,
            center_y: 35.0,
            width: 70.0,
            height: 70.0,
        }
    }

    #[test]
    fn test_nan_counts_skip_cell() {
        let palette = Palette::default();
        assert!(render_cell(&geom(), f64::NAN, 1.0, 5, &palette).is_none());
        assert!(render_cell(&geom(), 1.0, f64::NAN, 5, &palette).is_none());
    }

    #[test]
    fn test_zero_counts_use_neutral() {
        let palette = Palette::default();
        let scene = render_cell(&geom(), 0.0, 0.0, 5, &palette).unwrap();
        assert_eq!(scene.incident_band.fill, palette.neutral);
        assert_eq!(scene.risk_band.fill, palette.neutral);
    }

    #[test]
    fn test_positive_incidents_alert_upper_band_only() {
        let palette = Palette::default();
        let scene = render_cell(&geom(), 3.0, 0.0, 5, &palette).unwrap();
        assert_eq!(scene.incident_band.fill, palette.alert_incident);
        assert_eq!(scene.risk_band.fill, palette.neutral);
    }

    #[test]
    fn test_positive_risks_alert_lower_band_only() {
        let palette = Palette::default();
        let scene = render_cell(&geom(), 0.0, 2.0, 5, &palette).unwrap();
        assert_eq!(scene.incident_band.fill, palette.neutral);
        assert_eq!(scene.risk_band.fill, palette.alert_risk);
    }

    #[test]
    fn test_bands_equal_height_and_inset() {
        let scene = render_cell(&geom(), 1.0, 1.0, 5, &Palette::default()).unwrap();
        let upper = scene.incident_band.rect;
        let lower = scene.risk_band.rect;
        assert_eq!(upper.height, lower.height);
        assert_eq!(upper.width, lower.width);
        assert_eq!(upper.x, lower.x);
        // Upper band sits inside the top half, lower inside the bottom half.
        assert!(upper.y > 0.0);
        assert!(upper.y + upper.height < 35.0);
        assert!(lower.y > 35.0);
        assert!(lower.y + lower.height < 70.0);
    }

    #[test]
    fn test_label_centered_and_zero_padded() {
        let scene = render_cell(&geom(), 1.0, 0.0, 5, &Palette::default()).unwrap();
        assert_eq!(scene.label.text, "05");
        assert_eq!(scene.label.x, 35.0);
        assert_eq!(scene.label.y, 35.0);
        assert!(scene.label.font_size > 0.0);

        let scene = render_cell(&geom(), 1.0, 0.0, 24, &Palette::default()).unwrap();
        assert_eq!(scene.label.text, "24");
    }

    #[test]
    fn test_font_scales_with_cell_size() {
        let small = CellGeometry {
            center_x: 10.0,
            center_y: 10.0,
            width: 20.0,
            height: 20.0,
        };
        let big_scene = render_cell(&geom(), 1.0, 1.0, 5, &Palette::default()).unwrap();
        let small_scene = render_cell(&small, 1.0, 1.0, 5, &Palette::default()).unwrap();
        assert!(big_scene.label.font_size > small_scene.label.font_size);
    }
}
