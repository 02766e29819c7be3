//! Presentation layer: pure functions from state to printed text.

use chrono::Local;
use weatherview_core::{WeatherReport, WeatherState, condition_glyph};

use crate::theme::{Palette, RESET};

/// The line shown while a lookup is in flight.
pub fn loading_line(palette: &Palette) -> String {
    format!("{}Loading...{}", palette.dim, RESET)
}

/// One repaint of the view: loading line, error line, result card, whichever
/// of them the state calls for.
pub fn render(state: &WeatherState) -> String {
    let palette = Palette::for_mode(state.dark_mode);
    let mut out = String::new();

    if state.loading {
        out.push_str(&loading_line(&palette));
        out.push('\n');
    }

    if let Some(error) = &state.error {
        out.push_str(&format!("{}{error}{}\n", palette.error, RESET));
    }

    if let Some(report) = &state.weather {
        out.push_str(&render_card(report, &palette));
    }

    out
}

/// The result card: name, description, glyph, temperatures, humidity.
fn render_card(report: &WeatherReport, palette: &Palette) -> String {
    let glyph = condition_glyph(&report.condition);
    let updated = report.fetched_at.with_timezone(&Local).format("%H:%M");

    format!(
        "{h}{name}{r}\n\
         {d}{description}{r}\n\
         {glyph}  {t}{temp}\u{b0}C{r}  {d}feels like {feels}\u{b0}C{r}\n\
         {d}Humidity: {humidity}%  Updated: {updated}{r}\n",
        h = palette.heading,
        t = palette.text,
        d = palette.dim,
        r = RESET,
        name = report.location_name,
        description = report.description,
        temp = report.temperature_rounded(),
        feels = report.feels_like_rounded(),
        humidity = report.humidity_pct,
    )
}
