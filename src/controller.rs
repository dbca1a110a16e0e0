//! Composes the catalog index, fuzzy filter, nearest-match resolution, and
//! scroll math into the state machine driven by the UI.
//!
//! Everything here is single-threaded and cooperative: the debounced
//! auto-selection is a deadline the UI polls via [`SelectionController::tick`],
//! and the virtualization engine reports visible ranges back asynchronously
//! through [`SelectionController::on_visible_range`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::audio::PlaybackSink;
use crate::catalog::NameIndex;
use crate::list_position;
use crate::search::{fuzzy, nearest};

/// Delay between the last query edit and the automatic selection commit.
pub const AUTO_COMMIT_DELAY: Duration = Duration::from_millis(500);

/// Outbound command for the virtualized list, drained by the UI each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Center the row at this filtered-list position in the viewport.
    ToIndex(usize),
    /// Jump to an absolute pixel offset.
    ToOffset(f32),
}

/// Which writer last set the travel percentage. Both writers target the
/// same value and the last call wins; the tag only keeps the race
/// observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelWriter {
    #[default]
    Idle,
    /// The virtualization engine reported a visible range.
    UserScroll,
    /// A match jump wrote an optimistic override.
    AutoJump,
}

/// Currently highlighted entry. `played` marks whether the automatic
/// playback side effect already fired for this selection; manual clicks
/// bypass it entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    pub played: bool,
}

/// The single cancellable commit slot. Replacing it is the cancellation:
/// only the commit scheduled by the most recent query edit can ever fire.
struct PendingCommit {
    name: String,
    deadline: Instant,
}

/// Owns the query, the filtered list, the selection, and the travel
/// percentage, and issues commands to the list and the audio sink.
pub struct SelectionController {
    index: NameIndex,
    audio_ext: String,
    player: Option<Rc<RefCell<dyn PlaybackSink>>>,
    query: String,
    filtered: Vec<usize>,
    selection: Option<Selection>,
    travel: f32,
    travel_writer: TravelWriter,
    pending: Option<PendingCommit>,
    scroll_command: Option<ScrollCommand>,
}

impl SelectionController {
    pub fn new(
        index: NameIndex,
        player: Option<Rc<RefCell<dyn PlaybackSink>>>,
        audio_ext: impl Into<String>,
    ) -> Self {
        let filtered = (0..index.sorted_written().len()).collect();
        Self {
            index,
            audio_ext: audio_ext.into(),
            player,
            query: String::new(),
            filtered,
            selection: None,
            travel: 0.0,
            travel_writer: TravelWriter::Idle,
            pending: None,
            scroll_command: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of entries in the current filtered list.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Written name at a filtered-list position.
    pub fn written_at(&self, row: usize) -> Option<&str> {
        self.filtered
            .get(row)
            .and_then(|&index| self.index.sorted_written().get(index))
            .map(String::as_str)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn travel_percentage(&self) -> f32 {
        self.travel
    }

    pub fn travel_writer(&self) -> TravelWriter {
        self.travel_writer
    }

    /// Deadline of the pending auto-commit, for repaint scheduling.
    pub fn next_commit_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Drain the outbound scroll command for the virtualized list.
    pub fn take_scroll_command(&mut self) -> Option<ScrollCommand> {
        self.scroll_command.take()
    }

    /// Replace the active query: refilter, jump toward the nearest match,
    /// and reschedule the automatic commit. An empty query cancels any
    /// pending commit and restores the full list; the selection is left
    /// alone in every case.
    pub fn set_query(&mut self, text: &str, now: Instant) {
        if self.query == text {
            return;
        }
        self.query.clear();
        self.query.push_str(text);
        self.filtered = fuzzy::filter_indices(&self.query, self.index.sorted_written());
        tracing::trace!(
            "Query {:?} filtered to {} of {} names",
            self.query,
            self.filtered.len(),
            self.index.sorted_written().len()
        );

        if self.query.is_empty() {
            self.pending = None;
            return;
        }
        let Some(found) = nearest::closest(&self.query, self.filtered_names()) else {
            // Nothing matched; render an empty list and force nothing.
            self.pending = None;
            return;
        };
        let name = self
            .written_at(found.index)
            .unwrap_or_default()
            .to_string();
        self.scroll_command = Some(ScrollCommand::ToIndex(found.index));
        self.travel = list_position::jump_travel(found.index, self.filtered.len());
        self.travel_writer = TravelWriter::AutoJump;
        self.pending = Some(PendingCommit {
            name,
            deadline: now + AUTO_COMMIT_DELAY,
        });
    }

    /// Advance cooperative time: commit a due pending selection, then fire
    /// the playback side effect for any selection that has not played yet.
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = &self.pending {
            if now >= pending.deadline {
                let name = pending.name.clone();
                self.pending = None;
                tracing::debug!("Auto-selecting {name:?}");
                self.selection = Some(Selection {
                    name,
                    played: false,
                });
            }
        }
        self.flush_playback();
    }

    /// Manual click on a filtered-list row: select it and always play,
    /// even when re-clicking the current selection.
    pub fn click_row(&mut self, row: usize) {
        let Some(name) = self.written_at(row).map(str::to_string) else {
            return;
        };
        self.selection = Some(Selection {
            name: name.clone(),
            played: true,
        });
        self.request_play(&name);
    }

    /// Authoritative travel recompute from the virtualization engine's
    /// visible-range notification.
    pub fn on_visible_range(&mut self, start_index: usize, visible_count: usize) {
        self.travel =
            list_position::travel_percentage(start_index, self.filtered.len(), visible_count);
        self.travel_writer = TravelWriter::UserScroll;
    }

    /// Scrollbar click/drag fraction, converted into an offset command for
    /// the list.
    pub fn on_scrollbar_fraction(&mut self, fraction: f32, total_extent: f32, viewport: f32) {
        let offset = list_position::fraction_to_offset(fraction, total_extent, viewport);
        self.scroll_command = Some(ScrollCommand::ToOffset(offset));
    }

    /// Audio resource locator for a written name, e.g. `audio/mia.mp3`.
    pub fn locator_for(&self, written: &str) -> Option<String> {
        self.index
            .phonetic_for(written)
            .map(|key| format!("audio/{key}.{ext}", ext = self.audio_ext))
    }

    fn filtered_names(&self) -> impl Iterator<Item = &str> {
        self.filtered
            .iter()
            .filter_map(|&index| self.index.sorted_written().get(index))
            .map(String::as_str)
    }

    fn flush_playback(&mut self) {
        let Some(selection) = self.selection.as_mut() else {
            return;
        };
        if selection.played {
            return;
        }
        selection.played = true;
        let name = selection.name.clone();
        self.request_play(&name);
    }

    fn request_play(&mut self, written: &str) {
        let Some(locator) = self.locator_for(written) else {
            tracing::warn!("No phonetic key for {written:?}; skipping playback");
            return;
        };
        tracing::debug!("Requesting playback of {locator}");
        if let Some(player) = &self.player {
            player.borrow_mut().play(&locator);
        }
    }
}
