//! A selection slider over observation times with an explicit
//! "value changed" subscription.

use crate::map::error::MapError;
use log::debug;

/// One selectable slider position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderOption {
    /// Displayed text, `YYYY-MM-DDTHH:MM:SSZ`.
    pub label: String,
    /// Epoch milliseconds.
    pub value: i64,
}

/// Payload of the slider's single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueChange {
    pub old: i64,
    pub new: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ValueChange)>;

/// Holds the options, the current position and the registered observers.
///
/// Starts on the first option. Observers run synchronously, in subscription
/// order, and only when the value actually changes.
pub struct TimeSlider {
    description: String,
    options: Vec<SliderOption>,
    index: usize,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl TimeSlider {
    /// # Errors
    ///
    /// Returns [`MapError::EmptyCatalog`] when `options` is empty.
    pub fn new(
        description: impl Into<String>,
        options: Vec<SliderOption>,
    ) -> Result<Self, MapError> {
        if options.is_empty() {
            return Err(MapError::EmptyCatalog);
        }
        Ok(Self {
            description: description.into(),
            options,
            index: 0,
            observers: Vec::new(),
            next_id: 0,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn options(&self) -> &[SliderOption] {
        &self.options
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> i64 {
        self.options[self.index].value
    }

    pub fn label(&self) -> &str {
        &self.options[self.index].label
    }

    /// Registers `observer` for value changes.
    pub fn subscribe(&mut self, observer: impl FnMut(&ValueChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Moves to the option whose value is `ms`. Returns whether it changed.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnknownTimestamp`] if no option has value `ms`.
    pub fn set_value(&mut self, ms: i64) -> Result<bool, MapError> {
        let index = self
            .options
            .iter()
            .position(|option| option.value == ms)
            .ok_or(MapError::UnknownTimestamp(ms))?;
        Ok(self.move_to(index))
    }

    /// Moves to the option at `index`. Returns whether it changed.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IndexOutOfRange`] past the last option.
    pub fn select_index(&mut self, index: usize) -> Result<bool, MapError> {
        if index >= self.options.len() {
            return Err(MapError::IndexOutOfRange {
                index,
                len: self.options.len(),
            });
        }
        Ok(self.move_to(index))
    }

    fn move_to(&mut self, index: usize) -> bool {
        if index == self.index {
            return false;
        }
        let change = ValueChange {
            old: self.value(),
            new: self.options[index].value,
        };
        self.index = index;
        debug!(
            "{} moved to {} ({} observers)",
            self.description,
            self.options[index].label,
            self.observers.len()
        );
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn options() -> Vec<SliderOption> {
        [10, 20, 30]
            .into_iter()
            .map(|value| SliderOption {
                label: format!("t{value}"),
                value,
            })
            .collect()
    }

    #[test]
    fn test_starts_on_first_option() {
        let slider = TimeSlider::new("Time", options()).unwrap();
        assert_eq!(slider.value(), 10);
        assert_eq!(slider.label(), "t10");
    }

    #[test]
    fn test_observers_see_changes_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut slider = TimeSlider::new("Time", options()).unwrap();

        let first = Rc::clone(&seen);
        slider.subscribe(move |change| first.borrow_mut().push(("first", *change)));
        let second = Rc::clone(&seen);
        slider.subscribe(move |change| second.borrow_mut().push(("second", *change)));

        assert!(slider.set_value(30).unwrap());
        let change = ValueChange { old: 10, new: 30 };
        assert_eq!(*seen.borrow(), vec![("first", change), ("second", change)]);
    }

    #[test]
    fn test_no_event_without_change() {
        let calls = Rc::new(RefCell::new(0));
        let mut slider = TimeSlider::new("Time", options()).unwrap();
        let counter = Rc::clone(&calls);
        slider.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(!slider.set_value(10).unwrap());
        assert!(!slider.select_index(0).unwrap());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let calls = Rc::new(RefCell::new(0));
        let mut slider = TimeSlider::new("Time", options()).unwrap();
        let counter = Rc::clone(&calls);
        let id = slider.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(slider.unsubscribe(id));
        assert!(!slider.unsubscribe(id));
        slider.select_index(2).unwrap();
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(slider.observer_count(), 0);
    }

    #[test]
    fn test_invalid_positions() {
        let mut slider = TimeSlider::new("Time", options()).unwrap();
        assert!(matches!(
            slider.set_value(15),
            Err(MapError::UnknownTimestamp(15))
        ));
        assert!(matches!(
            slider.select_index(3),
            Err(MapError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(slider.value(), 10);
    }

    #[test]
    fn test_empty_options_rejected() {
        assert!(matches!(
            TimeSlider::new("Time", Vec::new()),
            Err(MapError::EmptyCatalog)
        ));
    }
}
