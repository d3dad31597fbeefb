use crate::error::Result;
use crate::model::{OutputFormat, PinReport};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;
use std::fmt::Write;

const PIN_SET_TEMPLATE: &str = include_str!("../templates/pin_set.xml.hbs");

#[derive(Serialize)]
struct JsonOut<'a, T: Serialize> {
    ok: bool,
    data: &'a T,
}

/// Renders `report` in the requested format. `expiration` only affects
/// [`OutputFormat::PinSet`].
pub fn render_report(
    report: &PinReport,
    format: OutputFormat,
    expiration: Option<&str>,
) -> Result<String> {
    match format {
        OutputFormat::Xml => Ok(render_xml(report)),
        OutputFormat::Okhttp => Ok(render_okhttp(report)),
        OutputFormat::PinSet => render_pin_set(report, expiration),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&JsonOut {
            ok: true,
            data: report,
        })?),
    }
}

fn render_xml(report: &PinReport) -> String {
    let mut out = format!(
        "Found {} certificates in the chain.\n\n",
        report.pins.len()
    );
    for cert in &report.pins {
        let _ = writeln!(out, "<!-- {} -->", cert.role);
        let _ = writeln!(out, "<pin digest=\"SHA-256\">{}</pin>", cert.pin);
    }
    out
}

fn render_okhttp(report: &PinReport) -> String {
    let mut out = String::new();
    for cert in &report.pins {
        let _ = writeln!(out, "// {}", cert.role);
        let _ = writeln!(out, "sha256/{}", cert.pin);
    }
    out
}

fn render_pin_set(report: &PinReport, expiration: Option<&str>) -> Result<String> {
    let pins = report
        .pins
        .iter()
        .map(|cert| {
            json!({
                "label": cert.role.label(),
                "pin": cert.pin,
            })
        })
        .collect::<Vec<_>>();

    let data = json!({
        "host": report.host,
        "expiration": expiration,
        "pins": pins,
    });

    let handlebars = Handlebars::new();
    Ok(handlebars.render_template(PIN_SET_TEMPLATE, &data)?)
}
