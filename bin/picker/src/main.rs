//! Terminal front end for the swatch color picker.

mod command;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use swatch::{
    Clipboard, ContrastText, Field, FileStorage, Formats, NoClipboard, Picker, Rgb8, Storage,
    SystemClipboard, Theme, DEFAULT_COLOR,
};

use crate::command::{Instruction, HELP};

/// Pick a color and opacity, copy its readouts and keep favorites.
#[derive(Parser, Debug)]
#[command(name = "swatch-picker")]
#[command(about = "Terminal color picker")]
struct Args {
    /// Starting color as #RRGGBB
    #[arg(long, default_value_t = DEFAULT_COLOR)]
    color: Rgb8,

    /// Starting opacity between 0 and 1
    #[arg(long, default_value_t = 1.0)]
    alpha: f64,

    /// Key-value storage file for the theme flag (defaults to the user
    /// configuration directory)
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Readouts to print: comma separated hex, rgba, hsl, or all
    #[arg(long, default_value = "all")]
    show: Formats,

    /// Never touch the system clipboard
    #[arg(long)]
    no_clipboard: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the preview and readouts
    Show,
    /// Copy one readout to the clipboard
    Copy {
        /// hex, rgba or hsl
        field: Field,
    },
    /// Print or change the theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
    /// Read commands from stdin
    Interactive,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeAction {
    Toggle,
    Dark,
    Light,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let path = match args.storage {
        Some(path) => path,
        None => FileStorage::default_path()?,
    };
    log::debug!("Using storage file {}", path.display());

    let clipboard: Box<dyn Clipboard> = if args.no_clipboard {
        Box::new(NoClipboard)
    } else {
        Box::new(SystemClipboard::new())
    };

    let mut picker = Picker::new(FileStorage::new(path), clipboard);
    picker.set_color(args.color);
    picker.set_alpha(args.alpha);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Command::Show) {
        Command::Show => render(&picker, args.show, &mut out)?,
        Command::Copy { field } => {
            let value = picker.copy(field);
            writeln!(out, "Copied: {value}")?;
        }
        Command::Theme { action } => {
            let theme = match action {
                None => picker.theme(),
                Some(ThemeAction::Toggle) => picker.toggle_theme(),
                Some(ThemeAction::Dark) => set_theme(&mut picker, Theme::Dark),
                Some(ThemeAction::Light) => set_theme(&mut picker, Theme::Light),
            };
            writeln!(out, "{theme}")?;
        }
        Command::Interactive => {
            let stdin = io::stdin();
            interactive(&mut picker, args.show, stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}

fn set_theme<S: Storage, C: Clipboard>(picker: &mut Picker<S, C>, theme: Theme) -> Theme {
    picker.set_theme(theme);
    theme
}

fn interactive<S: Storage, C: Clipboard>(
    picker: &mut Picker<S, C>,
    formats: Formats,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    render(picker, formats, out)?;
    writeln!(out, "{HELP}")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let instruction = match Instruction::parse(&line) {
            Ok(instruction) => instruction,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };

        match instruction {
            Instruction::Color(color) => {
                picker.set_color(color);
                render(picker, formats, out)?;
            }
            Instruction::Alpha(alpha) => {
                picker.set_alpha(alpha);
                render(picker, formats, out)?;
            }
            Instruction::Copy(field) => {
                let value = picker.copy(field);
                writeln!(out, "Copied: {value}")?;
            }
            Instruction::Save => {
                if picker.save_favorite() {
                    writeln!(out, "Saved to favorites")?;
                } else {
                    writeln!(out, "Already a favorite")?;
                }
            }
            Instruction::Favorites { json: false } => render_favorites(picker, out)?,
            Instruction::Favorites { json: true } => {
                serde_json::to_writer_pretty(&mut *out, picker.favorites())?;
                writeln!(out)?;
            }
            Instruction::Theme(theme) => {
                let theme = match theme {
                    Some(theme) => set_theme(picker, theme),
                    None => picker.toggle_theme(),
                };
                writeln!(out, "Theme: {theme}")?;
            }
            Instruction::Show => render(picker, formats, out)?,
            Instruction::Help => writeln!(out, "{HELP}")?,
            Instruction::Quit => break,
        }
    }

    Ok(())
}

/// Foreground and background escape codes matching the picker theme.
fn theme_colors(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Light => ("\x1b[38;2;17;24;39m", "\x1b[48;2;255;255;255m"),
        Theme::Dark => ("\x1b[38;2;243;244;246m", "\x1b[48;2;31;41;55m"),
    }
}

fn render<S: Storage, C: Clipboard>(
    picker: &Picker<S, C>,
    formats: Formats,
    out: &mut impl Write,
) -> io::Result<()> {
    let (fg, bg) = theme_colors(picker.theme());
    let preview = picker.preview();
    let Rgb8 { red, green, blue } = picker.color();
    let text = match preview.text {
        ContrastText::Black => "0;0;0",
        ContrastText::White => "255;255;255",
    };

    writeln!(out, "{fg}{bg} Color Picker ({} theme) \x1b[0m", picker.theme())?;
    writeln!(out, "Opacity: {}", picker.alpha())?;
    writeln!(
        out,
        "\x1b[48;2;{red};{green};{blue}m\x1b[38;2;{text}m    Preview Text    \x1b[0m  {} on {}",
        preview.text, preview.background
    )?;

    for (field, value) in picker.readouts(formats) {
        writeln!(out, "{}: {value}", field.label())?;
    }

    Ok(())
}

fn render_favorites<S: Storage, C: Clipboard>(
    picker: &Picker<S, C>,
    out: &mut impl Write,
) -> io::Result<()> {
    if picker.favorites().is_empty() {
        return writeln!(out, "No favorites yet");
    }

    writeln!(out, "Favorites:")?;
    for favorite in picker.favorites() {
        let Rgb8 { red, green, blue } = favorite.color;
        writeln!(
            out,
            "  \x1b[48;2;{red};{green};{blue}m      \x1b[0m {}  {}",
            favorite.title(),
            favorite.swatch()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use swatch::MemoryStorage;

    use super::*;

    fn run(script: &str) -> (String, Picker<MemoryStorage, NoClipboard>) {
        let mut picker = Picker::new(MemoryStorage::new(), NoClipboard);
        let mut out = Vec::new();
        interactive(&mut picker, Formats::all(), script.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), picker)
    }

    #[test]
    fn renders_readouts() {
        let (out, _) = run("");
        assert!(out.contains("HEX: #3498db"));
        assert!(out.contains("RGBA: rgba(52, 152, 219, 1)"));
        assert!(out.contains("HSL: hsl(204, 70%, 53%)"));
        assert!(out.contains("Opacity: 1"));
    }

    #[test]
    fn script_drives_the_picker() {
        let (out, picker) = run("color #ffffff\nalpha 0.5\nsave\nsave\nalpha 2\nsave\ntheme\nquit\nsave\n");
        assert_eq!(picker.color(), Rgb8::new(255, 255, 255));
        assert_eq!(picker.alpha(), 1.0);
        assert_eq!(picker.favorites().len(), 2);
        assert_eq!(picker.theme(), Theme::Dark);
        assert!(out.contains("Already a favorite"));
        assert!(out.contains("Theme: dark"));
    }

    #[test]
    fn errors_do_not_stop_the_loop() {
        let (out, picker) = run("color #12\ncolor #000000\n");
        assert!(out.contains("error: invalid color format \"#12\""));
        assert_eq!(picker.color(), Rgb8::new(0, 0, 0));
    }

    #[test]
    fn favorites_export_as_json() {
        let (out, _) = run("favorites json\nsave\nalpha 0.5\nsave\nfavorites json\n");
        assert!(out.contains("[]"));
        let start = out.rfind("[\n").unwrap();
        let end = out.rfind(']').unwrap() + 1;
        let exported: serde_json::Value = serde_json::from_str(&out[start..end]).unwrap();
        assert_eq!(
            exported,
            serde_json::json!([
                { "color": "#3498db", "alpha": 1.0 },
                { "color": "#3498db", "alpha": 0.5 },
            ])
        );
    }

    #[test]
    fn copy_without_clipboard_still_reports_value() {
        let (out, _) = run("copy hsl\n");
        assert!(out.contains("Copied: hsl(204, 70%, 53%)"));
    }

    #[test]
    fn cli_parses() {
        let args = Args::try_parse_from([
            "swatch-picker",
            "--color",
            "#FF0000",
            "--alpha",
            "0.5",
            "--show",
            "hex,hsl",
            "copy",
            "rgba",
        ])
        .unwrap();
        assert_eq!(args.color, Rgb8::new(255, 0, 0));
        assert_eq!(args.alpha, 0.5);
        assert_eq!(args.show, Formats::HEX | Formats::HSL);
        assert!(matches!(args.command, Some(Command::Copy { field: Field::Rgba })));

        assert!(Args::try_parse_from(["swatch-picker", "--color", "red"]).is_err());
    }
}
