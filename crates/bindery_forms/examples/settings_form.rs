//! Settings Form Demo
//!
//! Builds a settings form bound to one host record, drives it headlessly the
//! way a user would and prints the record after each step:
//! - Click-to-toggle switch row and a checkbox
//! - Debounced volume slider on the tokio runtime
//! - Select, filter chips and a validated text field
//!
//! Run with: RUST_LOG=debug cargo run -p bindery_forms --example settings_form

use std::time::Duration;

use bindery_core::widget::props;
use bindery_forms::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Default)]
struct Settings {
    wifi: bool,
    analytics: bool,
    volume: f64,
    theme: String,
    languages: Vec<String>,
    email: String,
}

const SLIDER_OPTIONS: &str = r#"{ "min": 0, "max": 10, "timeoutMs": 50 }"#;

fn build(form: &Form<Settings>) -> Result<Element> {
    let slider_options: SliderOptions = bindery_core::options_from_json(SLIDER_OPTIONS)?;

    Ok(form.column([
        form.switch("Wi-Fi", &lens!(Settings, wifi), SwitchOptions::default()),
        form.checkbox("Share analytics", &lens!(Settings, analytics), CheckboxOptions::default()),
        form.slider("Volume", &lens!(Settings, volume), slider_options),
        form.select(
            "Theme",
            &lens!(Settings, theme),
            ["light", "dark", "system"],
            SelectOptions::default(),
        ),
        form.filter(
            "Languages",
            &lens!(Settings, languages),
            ["en", "fr", "de"],
            FilterOptions::default().mode(FilterMode::OneOrMore),
        ),
        form.text_field(
            "Email*",
            &lens!(Settings, email),
            TextFieldOptions::default()
                .input_type("email")
                .reset(true)
                .validate(|text| {
                    if text.contains('@') {
                        Validation::ok()
                    } else {
                        Validation::error("Enter an email address")
                    }
                }),
        ),
    ]))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = Host::new(Settings {
        theme: "system".into(),
        languages: vec!["en".into()],
        ..Default::default()
    });
    let form = Form::new(host.clone());

    let mut renderer = HeadlessRenderer::new();
    renderer.render(build(&form)?);

    renderer.click(renderer.require(WidgetKind::ListItem)?)?;
    renderer.click(renderer.require(WidgetKind::Checkbox)?)?;
    println!("toggled:   {:?}", host.snapshot());

    let volume = renderer.require(WidgetKind::Slider)?;
    for step in [2.0, 4.0, 6.0, 8.0] {
        renderer.slide(volume, step)?;
    }
    println!("dragging:  volume = {}", host.read(|s| s.volume));
    tokio::time::sleep(Duration::from_millis(80)).await;
    println!("settled:   volume = {}", host.read(|s| s.volume));

    renderer.choose(renderer.require(WidgetKind::Select)?, 1)?;

    let chips = renderer.find(WidgetKind::FilterChip);
    renderer.click(chips[0])?;
    renderer.click(chips[2])?;

    let email = renderer.require(WidgetKind::TextField)?;
    renderer.type_text(email, "ada")?;
    println!(
        "email:     {:?} (error: {:?})",
        host.read(|s| s.email.clone()),
        renderer.prop(email, props::ERROR_TEXT)
    );
    renderer.type_text(email, "ada@example.com")?;

    if host.take_dirty() {
        renderer.render(build(&form)?);
    }
    println!("final:     {:?}", host.snapshot());
    Ok(())
}
