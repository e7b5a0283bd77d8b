//! Line commands understood by the interactive mode.

use swatch::{Field, Rgb8, Theme};

#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    Color(Rgb8),
    Alpha(f64),
    Copy(Field),
    Save,
    Favorites { json: bool },
    Theme(Option<Theme>),
    Show,
    Help,
    Quit,
}

impl Instruction {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or_else(|| "empty command".to_string())?;
        let arg = words.next();

        if let Some(extra) = words.next() {
            return Err(format!("unexpected argument {extra:?}"));
        }

        let required = |what: &str| arg.ok_or_else(|| format!("{name} needs {what}"));

        let instruction = match name.to_ascii_lowercase().as_str() {
            "color" => Instruction::Color(
                required("a #RRGGBB color")?
                    .parse()
                    .map_err(|err: swatch::Error| err.to_string())?,
            ),
            "alpha" => {
                let value = required("a value between 0 and 1")?;
                Instruction::Alpha(
                    value
                        .parse()
                        .map_err(|_| format!("invalid opacity {value:?}"))?,
                )
            }
            "copy" => Instruction::Copy(required("hex, rgba or hsl")?.parse()?),
            "save" => Instruction::Save,
            "favorites" => Instruction::Favorites {
                json: match arg {
                    None => false,
                    Some("json") => true,
                    Some(other) => return Err(format!("unknown favorites format {other:?}")),
                },
            },
            "theme" => Instruction::Theme(match arg {
                None | Some("toggle") => None,
                Some("dark") => Some(Theme::Dark),
                Some("light") => Some(Theme::Light),
                Some(other) => return Err(format!("unknown theme {other:?}")),
            }),
            "show" => Instruction::Show,
            "help" | "?" => Instruction::Help,
            "quit" | "exit" | "q" => Instruction::Quit,
            other => return Err(format!("unknown command {other:?}, try help")),
        };

        if arg.is_some()
            && matches!(
                instruction,
                Instruction::Save
                    | Instruction::Show
                    | Instruction::Help
                    | Instruction::Quit
            )
        {
            return Err(format!("{name} takes no argument"));
        }

        Ok(instruction)
    }
}

pub const HELP: &str = "\
commands:
  color <#RRGGBB>         pick a color
  alpha <0..1>            set the opacity
  copy <hex|rgba|hsl>     copy a readout to the clipboard
  save                    save the color and opacity as a favorite
  favorites [json]        list favorites, or export them as JSON
  theme [toggle|dark|light]
  show                    print the picker
  quit";
