//! Selection and navigation state machine for one search box.
//!
//! A [`SearchSession`] owns no UI. Callers feed it input values and key, click,
//! and submit events, and act on the [`Effect`] each handler returns. Debouncing
//! lives outside: [`SearchSession::input`] asks for a query to be scheduled and
//! the caller hands it back to [`SearchSession::show`] once the input settles.

use crate::model::Dataset;
use crate::navigation::Destination;
use crate::search::{self, Query, SuggestLimits, Suggestions};

/// Where the session is in its interaction cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Suggesting,
    /// Terminal for this cycle; any further input starts a new one.
    Navigating(Destination),
}

/// Keys the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
}

/// What the UI has to do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changes.
    None,
    /// Schedule `show` with this query after the debounce delay.
    Schedule(Query),
    /// Re-render the suggestion list (contents or highlighted row changed).
    Render,
    /// Clear and hide the suggestion list.
    Hide,
    Navigate(Destination),
}

#[derive(Debug)]
pub struct SearchSession<'a> {
    dataset: &'a Dataset,
    limits: SuggestLimits,
    phase: Phase,
    /// Raw value of the input box.
    input: String,
    suggestions: Suggestions<'a>,
    /// `None` is "nothing highlighted".
    highlighted: Option<usize>,
}

impl<'a> SearchSession<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_limits(dataset, SuggestLimits::default())
    }

    pub fn with_limits(dataset: &'a Dataset, limits: SuggestLimits) -> Self {
        Self {
            dataset,
            limits,
            phase: Phase::Idle,
            input: String::new(),
            suggestions: Suggestions::default(),
            highlighted: None,
        }
    }

    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    pub const fn suggestions(&self) -> &Suggestions<'a> {
        &self.suggestions
    }

    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// The input box value changed.
    pub fn input(&mut self, value: &str) -> Effect {
        value.clone_into(&mut self.input);
        self.highlighted = None;

        let query = Query::new(value);
        if query.is_searchable() {
            Effect::Schedule(query)
        } else {
            self.hide()
        }
    }

    /// The debounce delay elapsed for `query`: run the engine and show the list.
    pub fn show(&mut self, query: &Query) -> &Suggestions<'a> {
        self.suggestions = search::suggest_with_limits(query, self.dataset, self.limits);
        self.highlighted = None;
        self.phase = Phase::Suggesting;
        tracing::trace!(
            query = %query,
            players = self.suggestions.players.len(),
            teams = self.suggestions.teams.len(),
            "Showing suggestions"
        );
        &self.suggestions
    }

    pub fn key(&mut self, key: Key) -> Effect {
        match key {
            Key::Escape => self.hide(),
            _ if self.phase != Phase::Suggesting => Effect::None,
            Key::Down => {
                let Some(last) = self.suggestions.len().checked_sub(1) else {
                    return Effect::None;
                };
                self.highlighted = Some(self.highlighted.map_or(0, |i| (i + 1).min(last)));
                Effect::Render
            }
            Key::Up => match self.highlighted {
                None => Effect::None,
                Some(i) => {
                    self.highlighted = i.checked_sub(1);
                    Effect::Render
                }
            },
            Key::Enter => match self.highlighted {
                Some(index) => self.click(index),
                None => Effect::None,
            },
        }
    }

    /// A row of the visible list was clicked.
    pub fn click(&mut self, index: usize) -> Effect {
        if self.phase != Phase::Suggesting {
            return Effect::None;
        }
        match self.suggestions.get(index) {
            Some(item) => self.navigate(item.destination()),
            None => Effect::None,
        }
    }

    /// A click landed outside the search form.
    pub fn dismiss(&mut self) -> Effect {
        self.hide()
    }

    /// The form was submitted directly.
    ///
    /// An exact player match wins, then an exact team match. Otherwise the
    /// fuzzy list is shown, as long as the query is long enough to search.
    pub fn submit(&mut self) -> Effect {
        let query = Query::new(&self.input);
        if query.is_empty() {
            return Effect::None;
        }

        if let Some(destination) = search::resolve(&query, self.dataset) {
            return self.navigate(destination);
        }

        if query.is_searchable() {
            self.show(&query);
            Effect::Render
        } else {
            self.hide()
        }
    }

    fn navigate(&mut self, destination: Destination) -> Effect {
        tracing::debug!(?destination, "Navigating");
        self.phase = Phase::Navigating(destination.clone());
        self.highlighted = None;
        Effect::Navigate(destination)
    }

    fn hide(&mut self) -> Effect {
        self.highlighted = None;
        if matches!(self.phase, Phase::Suggesting) {
            self.phase = Phase::Idle;
            self.suggestions = Suggestions::default();
            Effect::Hide
        } else {
            if matches!(self.phase, Phase::Navigating(_)) {
                self.phase = Phase::Idle;
            }
            Effect::None
        }
    }
}
