//! Running command scripts against a session.

use std::fmt::Write;

use anyhow::{anyhow, bail};
use glam::ivec2;
use sight::{Actor, ActorId, Actors, Interpreter, RegionMap};
use ui::prelude::*;
use util::{writeln, StrExt};

use engine::prelude::*;
use engine::Receiver;

/// Script id of the event the sight checks run as.
const SCRIPT_EVENT: u32 = 1;

pub struct Runner {
    session: Session,
    recv: Receiver,
    /// Open fast travel menu, takes the following lines as key presses.
    scene: Option<FastTravelScene>,
    keys: InputMap,
    actors: Actors,
    regions: RegionMap,
    width: usize,
}

impl Runner {
    pub fn new(mut session: Session, regions: RegionMap, width: usize) -> Self {
        let recv = session.subscribe();
        Runner {
            session,
            recv,
            scene: None,
            keys: Default::default(),
            actors: Default::default(),
            regions,
            width,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run a script line, printing what happens into `out`.
    pub fn line(&mut self, line: &str, out: &mut String) -> anyhow::Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let ret = if self.scene.is_some() {
            self.keypresses(line, out)
        } else {
            let head = line.split_whitespace().next().unwrap_or_default();
            match head.to_kebab_case().as_str() {
                "actor" | "region" | "distance" | "in-range" | "in-sight" => {
                    self.sight(line, out)
                }
                _ => self.command(line, out),
            }
        };

        // Report side effects even if the line failed halfway.
        self.drain_messages(out);
        ret
    }

    fn command(&mut self, line: &str, out: &mut String) -> anyhow::Result<()> {
        let cmd: Command = line.parse()?;
        if let Outcome::OpenScene(categories) = self.session.apply(&cmd) {
            let scene = FastTravelScene::new(&self.session, &categories);
            writeln!(out, "{}", scene.render(&self.session, self.width));
            self.scene = Some(scene);
        }
        Ok(())
    }

    fn keypresses(&mut self, line: &str, out: &mut String) -> anyhow::Result<()> {
        for key in line.split_whitespace() {
            let action = self.keys.action(key)?;
            let Some(scene) = self.scene.as_mut() else {
                bail!("key {key:?} with no menu open");
            };

            match scene.input(&self.session, action) {
                Some(SceneAction::Travel(name)) => {
                    self.scene = None;
                    self.session.apply(&Command::Travel(name));
                    return Ok(());
                }
                Some(SceneAction::Close) => {
                    self.scene = None;
                    writeln!(out, "Menu closed");
                    return Ok(());
                }
                None => {}
            }
        }

        if let Some(scene) = &self.scene {
            writeln!(out, "{}", scene.render(&self.session, self.width));
        }
        Ok(())
    }

    fn drain_messages(&mut self, out: &mut String) {
        for msg in self.recv.try_iter() {
            match msg {
                Msg::Toast { name, se } => {
                    if let Some(se) = se {
                        writeln!(out, "Playing {se}");
                    }
                    let toast = Toast::new(&self.session.data().settings, &name);
                    writeln!(out, "{}", toast.window(self.width));
                }
                Msg::PlaySe(se) => {
                    writeln!(out, "Playing {se}");
                }
                Msg::Transfer(d) => {
                    writeln!(
                        out,
                        "Transfer to map {} at ({}, {}) facing {}",
                        d.map_id, d.x, d.y, d.direction
                    );
                }
            }
        }
    }

    /// Sight check lines.
    ///
    /// ```text
    /// actor ID X Y [DIR]
    /// region X Y TAG
    /// distance A B
    /// in-range A B RANGE
    /// in-sight A B RANGE [SLOPE]
    /// ```
    fn sight(&mut self, line: &str, out: &mut String) -> anyhow::Result<()> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (head, args) = words
            .split_first()
            .ok_or_else(|| anyhow!("empty line"))?;
        let head = head.to_kebab_case();

        let int = |i: usize| -> anyhow::Result<i32> {
            let a = args
                .get(i)
                .ok_or_else(|| anyhow!("{head}: missing argument {}", i + 1))?;
            a.parse().map_err(|_| anyhow!("{head}: bad number {a:?}"))
        };
        let arity = |min: usize, max: usize| -> anyhow::Result<()> {
            if args.len() < min || args.len() > max {
                bail!("{head}: expected {min} to {max} arguments");
            }
            Ok(())
        };

        match head.as_str() {
            "actor" => {
                arity(3, 4)?;
                let actor = Actor {
                    pos: ivec2(int(1)?, int(2)?),
                    direction: if args.len() > 3 { int(3)? } else { 2 },
                };
                self.place(int(0)?, actor)?;
            }
            "region" => {
                arity(3, 3)?;
                self.regions.set(ivec2(int(0)?, int(1)?), int(2)?);
            }
            "distance" => {
                arity(2, 2)?;
                let (a, b) = (int(0)?, int(1)?);
                let d = self.interpreter().event_distance(a, b);
                match d {
                    Some(d) => writeln!(out, "distance {a} {b}: {d}"),
                    None => writeln!(out, "distance {a} {b}: unknown actor"),
                }
            }
            "in-range" => {
                arity(3, 3)?;
                let (a, b, range) = (int(0)?, int(1)?, int(2)?);
                let ok = self.interpreter().event_in_range(a, b, range);
                writeln!(out, "in-range {a} {b} {range}: {ok}");
            }
            "in-sight" => {
                arity(3, 4)?;
                let (a, b, range) = (int(0)?, int(1)?, int(2)?);
                let slope = match args.get(3) {
                    Some(s) => Some(
                        s.parse::<f64>()
                            .map_err(|_| anyhow!("{head}: bad slope {s:?}"))?,
                    ),
                    None => None,
                };
                let mut interpreter = self.interpreter();
                let ok = interpreter.event_in_sight(a, b, range, slope);
                writeln!(
                    out,
                    "in-sight {a} {b} {range}: {ok}, wait {} frames",
                    interpreter.take_wait()
                );
            }
            _ => bail!("unknown sight command {head:?}"),
        }

        Ok(())
    }

    fn interpreter(&self) -> Interpreter<'_, Actors, RegionMap> {
        Interpreter::new(SCRIPT_EVENT, &self.actors, &self.regions)
    }

    fn place(&mut self, id: i32, actor: Actor) -> anyhow::Result<()> {
        match ActorId::from(id) {
            ActorId::This => {
                self.actors.events.insert(SCRIPT_EVENT, actor);
            }
            ActorId::Player => self.actors.player = Some(actor),
            ActorId::Follower(i) => {
                let n = self.actors.followers.len();
                if i > n {
                    bail!("actor {id}: place actor {} first", -(n as i32) - 2);
                }
                if i == n {
                    self.actors.followers.push(actor);
                } else {
                    self.actors.followers[i] = actor;
                }
            }
            ActorId::Event(n) => {
                self.actors.events.insert(n, actor);
            }
        }
        Ok(())
    }
}
