//! In-crate test doubles for the renderer and time source.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use worldclock_core::snapshot::TimeSnapshot;

use crate::client::{ClientError, TimeSource};
use crate::render::Renderer;
use crate::session::ClockView;

/// One call made to a `RecordingRenderer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Frame {
    Input,
    Loading(String),
    Clock { label: String, time: String },
    Update { time: String, date: String },
    Error(String),
}

/// A renderer that records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    frames: Mutex<Vec<Frame>>,
}

impl RecordingRenderer {
    pub(crate) fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }

    pub(crate) fn clock_updates(&self) -> Vec<Frame> {
        self.frames()
            .into_iter()
            .filter(|frame| matches!(frame, Frame::Update { .. }))
            .collect()
    }

    fn push(&self, frame: Frame) {
        self.frames.lock().unwrap().push(frame);
    }
}

impl Renderer for RecordingRenderer {
    fn show_input(&self) {
        self.push(Frame::Input);
    }

    fn show_loading(&self, country: &str) {
        self.push(Frame::Loading(country.to_owned()));
    }

    fn show_clock(&self, view: &ClockView) {
        self.push(Frame::Clock {
            label: view.label.clone(),
            time: view.time.clone(),
        });
    }

    fn update_clock(&self, time: &str, date: &str) {
        self.push(Frame::Update {
            time: time.to_owned(),
            date: date.to_owned(),
        });
    }

    fn show_error(&self, message: &str) {
        self.push(Frame::Error(message.to_owned()));
    }
}

/// One scripted answer of a `StubTimeSource`.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Answer(Result<TimeSnapshot, ClientError>),
    /// Never completes.
    Stall,
}

/// A time source that answers fetches from a script and records the
/// requested countries. The last reply repeats once the script runs out.
#[derive(Debug)]
pub(crate) struct StubTimeSource {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<String>>,
}

impl StubTimeSource {
    pub(crate) fn scripted(replies: Vec<Reply>) -> Self {
        assert!(!replies.is_empty(), "a scripted source needs at least one reply");
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self) -> Reply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies[0].clone()
        }
    }
}

#[async_trait]
impl TimeSource for StubTimeSource {
    async fn fetch_time(&self, country: &str) -> Result<TimeSnapshot, ClientError> {
        self.calls.lock().unwrap().push(country.to_owned());
        match self.next_reply() {
            Reply::Answer(result) => result,
            Reply::Stall => std::future::pending().await,
        }
    }
}
