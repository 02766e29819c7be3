//! The interactive WeatherView loop.
//!
//! Mounts with a fetch of the starting city, then cycles: prompt for an
//! action, run it against the view, repaint from the state snapshot.

use std::sync::Arc;

use anyhow::{Context, Result};
use inquire::{Select, Text};
use weatherview_core::{Config, IpLocationSource, OpenWeatherProvider, WeatherView};

use crate::render;
use crate::theme::{self, Palette};

const SEARCH: &str = "Search for a city";
const LOCATE: &str = "Use my location";
const QUIT: &str = "Quit";

pub async fn run(city_override: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let api_key = config.api_key()?;

    let provider = Arc::new(OpenWeatherProvider::new(api_key));
    let location = Arc::new(IpLocationSource::new());

    let start_city = city_override.unwrap_or_else(|| config.default_city.clone());
    let mut view = WeatherView::new(provider, Some(location), &start_city, &config.language);

    announce_loading(&view);
    view.mount().await;
    repaint(&view);

    loop {
        let dark = view.state().dark_mode;
        let options = vec![SEARCH, LOCATE, theme::toggle_label(dark), QUIT];

        let choice = Select::new("What next?", options)
            .prompt_skippable()
            .context("Action prompt failed")?;

        match choice {
            Some(SEARCH) => {
                let current = view.state().city.clone();
                let input = Text::new("City:")
                    .with_initial_value(&current)
                    .prompt_skippable()
                    .context("City prompt failed")?;

                let Some(input) = input else { continue };
                view.set_city(&input);

                announce_loading(&view);
                view.submit().await;
                repaint(&view);
            }
            Some(LOCATE) => {
                announce_loading(&view);
                view.locate().await;
                repaint(&view);
            }
            Some(QUIT) | None => break,
            // The remaining option is the theme toggle.
            Some(_) => {
                view.toggle_theme();
                repaint(&view);
            }
        }
    }

    Ok(())
}

fn announce_loading(view: &WeatherView) {
    let palette = Palette::for_mode(view.state().dark_mode);
    println!("{}", render::loading_line(&palette));
}

fn repaint(view: &WeatherView) {
    let output = render::render(view.state());
    if !output.is_empty() {
        println!("{output}");
    }
}
