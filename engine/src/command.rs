//! Fast travel commands as issued by event scripts.

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail};
use util::StrExt;

use crate::Destination;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Command {
    /// Open the fast travel menu, optionally limited to the given
    /// categories.
    CallScene(Vec<String>),
    /// Rebuild the registry from configuration.
    Reinitialize,
    Discover { name: String, discovered: bool },
    ChangeMap { name: String, destination: Destination },
    ChangeCategory { name: String, category: String },
    /// Pay for and travel to a point, what the menu does on confirm.
    Travel(String),
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words = split_words(s)?;
        let Some((head, args)) = words.split_first() else {
            bail!("empty command");
        };

        let int = |i: usize, default: Option<i32>| -> anyhow::Result<i32> {
            match (args.get(i), default) {
                (Some(a), _) => a
                    .parse()
                    .map_err(|_| anyhow!("{head}: bad number {a:?}")),
                (None, Some(d)) => Ok(d),
                (None, None) => bail!("{head}: missing argument {}", i + 1),
            }
        };
        let text = |i: usize| -> anyhow::Result<String> {
            args.get(i)
                .cloned()
                .ok_or_else(|| anyhow!("{head}: missing argument {}", i + 1))
        };
        let arity = |n: usize| -> anyhow::Result<()> {
            if args.len() > n {
                bail!("{head}: too many arguments");
            }
            Ok(())
        };

        let ret = match head.to_kebab_case().as_str() {
            "call-scene" => Command::CallScene(args.to_vec()),
            "reinitialize" => {
                arity(0)?;
                Command::Reinitialize
            }
            "discover" => {
                arity(2)?;
                let discovered = match args.get(1).map(|a| a.as_str()) {
                    None | Some("true") => true,
                    Some("false") => false,
                    Some(a) => bail!("discover: expected true or false, got {a:?}"),
                };
                Command::Discover {
                    name: text(0)?,
                    discovered,
                }
            }
            "change-map" => {
                arity(5)?;
                Command::ChangeMap {
                    name: text(0)?,
                    destination: Destination::new(
                        int(1, None)?,
                        int(2, None)?,
                        int(3, None)?,
                        int(4, Some(2))?,
                    ),
                }
            }
            "change-category" => {
                arity(2)?;
                Command::ChangeCategory {
                    name: text(0)?,
                    category: text(1)?,
                }
            }
            "travel" => {
                arity(1)?;
                Command::Travel(text(0)?)
            }
            _ => bail!("unknown command {head:?}"),
        };

        Ok(ret)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn q(s: &str) -> String {
            if s.is_empty() || s.contains(char::is_whitespace) {
                format!("\"{s}\"")
            } else {
                s.to_owned()
            }
        }

        match self {
            Command::CallScene(cats) => {
                write!(f, "call-scene")?;
                for c in cats {
                    write!(f, " {}", q(c))?;
                }
                Ok(())
            }
            Command::Reinitialize => write!(f, "reinitialize"),
            Command::Discover { name, discovered } => {
                write!(f, "discover {} {discovered}", q(name))
            }
            Command::ChangeMap { name, destination: d } => write!(
                f,
                "change-map {} {} {} {} {}",
                q(name),
                d.map_id,
                d.x,
                d.y,
                d.direction
            ),
            Command::ChangeCategory { name, category } => {
                write!(f, "change-category {} {}", q(name), q(category))
            }
            Command::Travel(name) => write!(f, "travel {}", q(name)),
        }
    }
}

/// Split a command line into words, double quotes group words with spaces.
fn split_words(s: &str) -> anyhow::Result<Vec<String>> {
    use nom::{
        branch::alt,
        bytes::complete::{is_not, take_while},
        character::complete::{char, multispace0, multispace1},
        combinator::all_consuming,
        multi::separated_list0,
        sequence::delimited,
        IResult,
    };

    fn word(s: &str) -> IResult<&str, &str> {
        alt((
            delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
            is_not(" \t\r\n\""),
        ))(s)
    }

    let (_, words) = all_consuming(delimited(
        multispace0,
        separated_list0(multispace1, word),
        multispace0,
    ))(s)
    .map_err(|e| anyhow!("malformed command {s:?}: {e}"))?;

    Ok(words.into_iter().map(|w| w.to_owned()).collect())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn cmd(s: &str) -> Command {
        s.parse().unwrap()
    }

    #[test]
    fn words() {
        assert_eq!(split_words("").unwrap(), Vec::<String>::new());
        assert_eq!(
            split_words("  discover  \"Old Mill\" false ").unwrap(),
            vec!["discover", "Old Mill", "false"]
        );
        assert_eq!(split_words("a \"\" b").unwrap(), vec!["a", "", "b"]);
        assert!(split_words("discover \"Old Mill").is_err());
    }

    #[test]
    fn parsing() {
        assert_eq!(cmd("call-scene"), Command::CallScene(vec![]));
        assert_eq!(
            cmd("CallScene Towns \"Deep Woods\""),
            Command::CallScene(vec!["Towns".into(), "Deep Woods".into()])
        );
        assert_eq!(cmd("reinitialize"), Command::Reinitialize);
        assert_eq!(
            cmd("discover Harbor"),
            Command::Discover {
                name: "Harbor".into(),
                discovered: true
            }
        );
        assert_eq!(
            cmd("discover \"Old Mill\" false"),
            Command::Discover {
                name: "Old Mill".into(),
                discovered: false
            }
        );
        assert_eq!(
            cmd("changeMap Harbor 3 10 -2"),
            Command::ChangeMap {
                name: "Harbor".into(),
                destination: Destination::new(3, 10, -2, 2)
            }
        );
        assert_eq!(
            cmd("change_category Harbor Coast"),
            Command::ChangeCategory {
                name: "Harbor".into(),
                category: "Coast".into()
            }
        );
        assert_eq!(cmd("travel \"Old Mill\""), Command::Travel("Old Mill".into()));
    }

    #[test]
    fn errors() {
        for bad in [
            "",
            "teleport Harbor",
            "discover",
            "discover Harbor maybe",
            "change-map Harbor 1 2",
            "change-map Harbor one 2 3",
            "change-category Harbor",
            "reinitialize now",
            "travel a b",
        ] {
            assert!(bad.parse::<Command>().is_err(), "{bad:?} parsed");
        }
    }

    #[test]
    fn display_parses_back() {
        for c in [
            Command::CallScene(vec!["Towns".into(), "Deep Woods".into()]),
            Command::Reinitialize,
            Command::Discover {
                name: "Old Mill".into(),
                discovered: false,
            },
            Command::ChangeMap {
                name: "Harbor".into(),
                destination: Destination::new(1, 2, 3, 8),
            },
            Command::ChangeCategory {
                name: "Harbor".into(),
                category: "".into(),
            },
            Command::Travel("Harbor".into()),
        ] {
            assert_eq!(c.to_string().parse::<Command>().unwrap(), c);
        }
    }
}
