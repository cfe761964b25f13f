//! `run` subcommand steps.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use anyhow::{Context, Result};

use super::HeadlessShowcase;
use crate::app::Outcome;
use crate::domains::carousel::{Direction, NavigationOutcome};
use crate::domains::chrome::ThemeMode;
use crate::infra::RuntimeConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
    Resize(u32),
    Select(String),
    Theme(ThemeMode),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('=') {
            None => match s {
                "next" => Ok(Step::Next),
                "prev" => Ok(Step::Prev),
                other => Err(format!("unknown step '{other}'")),
            },
            Some(("resize", px)) => px
                .parse()
                .map(Step::Resize)
                .map_err(|_| format!("resize needs a pixel width, got '{px}'")),
            Some(("select", id)) if !id.is_empty() => {
                Ok(Step::Select(id.to_string()))
            }
            Some(("theme", mode)) => mode.parse().map(Step::Theme),
            Some((key, _)) => Err(format!("unknown step '{key}'")),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => write!(f, "next"),
            Step::Prev => write!(f, "prev"),
            Step::Resize(px) => write!(f, "resize={px}"),
            Step::Select(id) => write!(f, "select={id}"),
            Step::Theme(mode) => write!(f, "theme={mode}"),
        }
    }
}

pub fn execute(
    showcase: &mut HeadlessShowcase,
    step: &Step,
    config: &RuntimeConfig,
    out: &mut impl Write,
) -> Result<()> {
    match step {
        Step::Next | Step::Prev => {
            let direction = if *step == Step::Next {
                Direction::Forward
            } else {
                Direction::Backward
            };
            if let NavigationOutcome::Suppressed(err) = showcase.advance(direction) {
                writeln!(out, "{step}: skipped ({err})")?;
                return Ok(());
            }
            // Let the shift finish before reporting where the track sits.
            showcase
                .carousel_mut()
                .track_mut()
                .advance_clock(config.navigation_transition().duration());
            report(showcase, step, out)
        }
        Step::Resize(px) => {
            showcase.carousel_mut().track_mut().set_viewport_width(*px);
            showcase.on_resize();
            report(showcase, step, out)
        }
        Step::Select(id) => {
            showcase
                .select(id)
                .with_context(|| format!("step '{step}'"))?;
            writeln!(out, "{step}:")?;
            write!(out, "{}", showcase.projector().region().render_text())?;
            Ok(())
        }
        Step::Theme(mode) => {
            if let Outcome::Themed { palette, .. } = showcase.set_theme(*mode) {
                let vars: Vec<String> = palette
                    .entries()
                    .iter()
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect();
                writeln!(out, "{step}: {}", vars.join(" "))?;
            }
            Ok(())
        }
    }
}

fn report(
    showcase: &mut HeadlessShowcase,
    step: &Step,
    out: &mut impl Write,
) -> Result<()> {
    let state = *showcase.carousel().state();
    let x = showcase.carousel_mut().track_mut().current_x();
    let visible: Vec<&str> =
        showcase.visible_items().iter().map(|id| id.as_str()).collect();
    writeln!(
        out,
        "{step}: index={} offset={}px x={x}px visible={} [{}]",
        state.current_index,
        state.offset(),
        state.visible_count,
        visible.join(", ")
    )?;
    Ok(())
}
