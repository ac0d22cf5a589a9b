//! Command-line argument parsing for the layout dump tool
//!
//! Supports:
//! - Viewport size
//! - Enabled positions, by name (`left-top`, `bottom-right`, ...)
//! - Stored extents per position (`left-top=200`)
//! - An explicit config file

use clap::Parser;
use std::path::PathBuf;

use viewpane::geometry::Rect;
use viewpane::position::EightPos;

/// Lay out a view pane and print every computed rectangle
#[derive(Parser, Debug)]
#[command(name = "viewpane-dump", version, about = "Dump a view pane layout")]
pub struct CliArgs {
    /// Positions to enable
    #[arg(value_name = "POSITIONS", value_parser = parse_pos)]
    pub positions: Vec<EightPos>,

    /// Viewport width
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Viewport height
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,

    /// Stored extent of a position, as POS=VALUE (repeatable)
    #[arg(short = 'e', long = "extent", value_name = "POS=VALUE", value_parser = parse_extent)]
    pub extents: Vec<(EightPos, f32)>,

    /// Config file to use instead of the user config
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable pixel snapping
    #[arg(long)]
    pub no_snap: bool,
}

/// What to lay out, derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct DumpRequest {
    pub viewport: Rect,
    pub positions: Vec<EightPos>,
    pub extents: Vec<(EightPos, f32)>,
    pub config: Option<PathBuf>,
    pub snap_to_pixel: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a dump request
    pub fn into_request(self) -> Result<DumpRequest, String> {
        if !(self.width.is_finite() && self.width >= 0.0) {
            return Err(format!("width must be a non-negative number, got {}", self.width));
        }
        if !(self.height.is_finite() && self.height >= 0.0) {
            return Err(format!("height must be a non-negative number, got {}", self.height));
        }

        let mut positions = self.positions;
        positions.dedup();

        Ok(DumpRequest {
            viewport: Rect::new(0.0, 0.0, self.width, self.height),
            positions,
            extents: self.extents,
            config: self.config,
            snap_to_pixel: !self.no_snap,
        })
    }
}

/// Parse a position name; case, `-` and `_` are ignored
fn parse_pos(s: &str) -> Result<EightPos, String> {
    let wanted: String = s
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase();
    EightPos::ALL
        .into_iter()
        .find(|pos| format!("{:?}", pos).to_lowercase() == wanted)
        .ok_or_else(|| format!("unknown position '{}'", s))
}

fn parse_extent(s: &str) -> Result<(EightPos, f32), String> {
    let (pos, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected POS=VALUE, got '{}'", s))?;
    let value: f32 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid extent '{}'", value))?;
    if !(value.is_finite() && value >= 0.0) {
        return Err(format!("extent must be a non-negative number, got {}", value));
    }
    Ok((parse_pos(pos.trim())?, value))
}
