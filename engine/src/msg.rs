//! Emitting messages about instant events to the host layer

use std::sync::mpsc::{self, Sender};

use derive_more::Deref;

use crate::{Destination, Notifier, SoundCue, TransferSignal};

/// Side effects the host game is expected to carry out.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Msg {
    /// Show a fast travel unlocked toast for the named point.
    Toast { name: String, se: Option<String> },

    /// Play a sound effect.
    PlaySe(String),

    /// Move the player to a new map position.
    Transfer(Destination),
}

#[derive(Deref)]
pub struct Receiver(mpsc::Receiver<Msg>);

/// Sending end for messages, drops messages when nobody listens.
#[derive(Clone, Default, Debug)]
pub struct Outbox(Option<Sender<Msg>>);

impl Outbox {
    /// Create a new channel, replacing any previous receiver.
    pub fn subscribe(&mut self) -> Receiver {
        let (send, recv) = mpsc::channel();
        self.0 = Some(send);
        Receiver(recv)
    }

    pub fn send(&mut self, msg: Msg) {
        if let Some(sender) = &self.0 {
            if sender.send(msg).is_err() {
                // Receiver was dropped, stop sending.
                self.0 = None;
            }
        }
    }
}

impl SoundCue for Outbox {
    fn play_se(&mut self, name: &str) {
        self.send(Msg::PlaySe(name.to_owned()));
    }
}

impl TransferSignal for Outbox {
    fn reserve_transfer(&mut self, destination: Destination) {
        self.send(Msg::Transfer(destination));
    }
}

impl Notifier for Outbox {
    fn point_discovered(&mut self, name: &str, se: Option<&str>) {
        self.send(Msg::Toast {
            name: name.to_owned(),
            se: se.map(|s| s.to_owned()),
        });
    }
}
