use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters_svg::SVGBackend;

use super::context::{CurveSeries, RenderContext};
use crate::error::{ValidationError, ValidationResult};

/// Paleta "deep" (seaborn), farby sa cyklicky opakujú pre ďalšie modely
pub const DEEP_PALETTE: [RGBColor; 10] = [
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
    RGBColor(129, 114, 179),
    RGBColor(147, 120, 96),
    RGBColor(218, 139, 195),
    RGBColor(140, 140, 140),
    RGBColor(204, 185, 116),
    RGBColor(100, 181, 205),
];

const NAVY: RGBColor = RGBColor(0, 0, 128);

/// Popis jedného panelu grafu
struct Panel {
    title: &'static str,
    x_desc: &'static str,
    y_desc: &'static str,
    diagonal: bool,
}

const ROC_PANEL: Panel = Panel {
    title: "Receiver operating characteristic",
    x_desc: "False Positive Rate",
    y_desc: "True Positive Rate",
    diagonal: true,
};

const PR_PANEL: Panel = Panel {
    title: "Precision Recall Curve",
    x_desc: "Recall",
    y_desc: "Precision",
    diagonal: false,
};

fn plot_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> ValidationError {
    ValidationError::Plot(err.to_string())
}

pub(crate) fn render_svg(ctx: &RenderContext) -> ValidationResult<String> {
    let (panel_w, panel_h) = ctx.panel_size();
    let both = !ctx.roc_series().is_empty() && !ctx.pr_series().is_empty();
    let width = if both { panel_w * 2 } else { panel_w };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, panel_h)).into_drawing_area();
        root.fill(&ctx.background()).map_err(plot_err)?;

        if ctx.is_empty() {
            root.draw(&Text::new(
                "Žiadne krivky na vykreslenie",
                (20, 20),
                ("sans-serif", 20).into_font().color(&BLACK),
            ))
            .map_err(plot_err)?;
        } else if both {
            let panels = root.split_evenly((1, 2));
            draw_panel(&panels[0], &ROC_PANEL, ctx.roc_series())?;
            draw_panel(&panels[1], &PR_PANEL, ctx.pr_series())?;
        } else if !ctx.roc_series().is_empty() {
            draw_panel(&root, &ROC_PANEL, ctx.roc_series())?;
        } else {
            draw_panel(&root, &PR_PANEL, ctx.pr_series())?;
        }

        root.present().map_err(plot_err)?;
    }

    log::debug!("SVG graf vykreslený ({}x{} px)", width, panel_h);
    Ok(svg)
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    series: &[CurveSeries],
) -> ValidationResult<()> {
    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0f64..1.0f64, 0.0f64..1.05f64)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_desc)
        .y_desc(panel.y_desc)
        .draw()
        .map_err(plot_err)?;

    if panel.diagonal {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, 0.0), (1.0, 1.0)],
                NAVY.stroke_width(2),
            )))
            .map_err(plot_err)?;
    }

    for (i, curve) in series.iter().enumerate() {
        let color = DEEP_PALETTE[i % DEEP_PALETTE.len()];
        chart
            .draw_series(LineSeries::new(curve.points(), color.stroke_width(2)))
            .map_err(plot_err)?
            .label(curve.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    Ok(())
}
