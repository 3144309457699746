use std::rc::Rc;

use log::{debug, trace};

pub trait Observer<S: Subject<E>, E: Clone> {
    fn update(&self, source: &S, event: E);

    fn name(&self) -> String;
}

pub trait Subject<E: Clone>: Sized {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);
    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);
    fn notify_observers(&self, event: E);
}

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

/// Ordered list of observers a subject fans its events out to.
///
/// The same observer may be registered more than once, in which case it is
/// notified once per registration.
pub struct Observers<S, E> {
    observers: Vec<SharedObserver<S, E>>,
}

impl<S, E> Default for Observers<S, E> {
    fn default() -> Self {
        Observers { observers: vec![] }
    }
}

impl<S, E> Observers<S, E>
where
    S: Subject<E>,
    E: Clone,
{
    pub fn register(&mut self, observer: SharedObserver<S, E>) {
        debug!("Observer {} attached", observer.name());
        self.observers.push(observer);
    }

    /// Removes the first registration of `observer`, compared by identity.
    pub fn unregister(&mut self, observer: &SharedObserver<S, E>) -> bool {
        match self
            .observers
            .iter()
            .position(|obs| Rc::ptr_eq(obs, observer))
        {
            Some(index) => {
                let removed = self.observers.remove(index);
                debug!("Observer {} detached", removed.name());
                true
            }
            None => false,
        }
    }

    pub fn notify(&self, source: &S, event: E) {
        trace!("Notifying {} observers", self.observers.len());
        for obs in &self.observers {
            obs.update(source, event.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.observers.iter().map(|obs| obs.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use mockall::{mock, Sequence};

    use super::{Observer, Observers, SharedObserver, Subject};

    #[derive(Default)]
    struct Ticker {
        observers: Observers<Ticker, u32>,
    }

    impl Subject<u32> for Ticker {
        fn register_observer(&mut self, observer: Rc<dyn Observer<Self, u32>>) {
            self.observers.register(observer);
        }

        fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, u32>>) {
            self.observers.unregister(&observer);
        }

        fn notify_observers(&self, event: u32) {
            self.observers.notify(self, event);
        }
    }

    mock! {
        Listener {}

        impl Observer<Ticker, u32> for Listener {
            fn update(&self, source: &Ticker, event: u32);

            fn name(&self) -> String;
        }
    }

    fn listener(name: &str, updates: usize) -> MockListener {
        let mut listener = MockListener::new();
        listener.expect_name().return_const(name.to_owned());
        listener.expect_update().times(updates).return_const(());
        listener
    }

    #[test]
    fn test_notify_should_follow_registration_order() {
        // Given
        let mut seq = Sequence::new();
        let mut ticker = Ticker::default();
        let mut observers: Vec<SharedObserver<Ticker, u32>> = vec![];
        for name in ["first", "second", "third"] {
            let mut listener = MockListener::new();
            listener.expect_name().return_const(name.to_owned());
            listener
                .expect_update()
                .withf(|_, event| *event == 7)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
            observers.push(Rc::new(listener));
        }
        observers
            .iter()
            .for_each(|obs| ticker.register_observer(obs.clone()));

        // When
        ticker.notify_observers(7);

        // Then
        assert_eq!(
            vec!["first", "second", "third"],
            ticker.observers.names(),
            "Should keep insertion order"
        );
    }

    #[test]
    fn test_unregister_should_stop_notifications() {
        // Given
        let mut ticker = Ticker::default();
        let kept: SharedObserver<Ticker, u32> = Rc::new(listener("kept", 2));
        let removed: SharedObserver<Ticker, u32> = Rc::new(listener("removed", 1));
        ticker.register_observer(kept.clone());
        ticker.register_observer(removed.clone());
        ticker.notify_observers(1);

        // When
        ticker.unregister_observer(removed);
        ticker.notify_observers(2);

        // Then
        assert_eq!(1, ticker.observers.len());
    }

    #[test]
    fn test_unregister_should_only_remove_first_duplicate() {
        // Given
        let mut observers = Observers::<Ticker, u32>::default();
        let duplicated: SharedObserver<Ticker, u32> = Rc::new(listener("duplicated", 3));
        observers.register(duplicated.clone());
        observers.register(duplicated.clone());
        let ticker = Ticker::default();
        observers.notify(&ticker, 1);

        // When
        let result = observers.unregister(&duplicated);
        observers.notify(&ticker, 2);

        // Then
        assert!(result, "Should report the removal");
        assert_eq!(1, observers.len(), "Should keep the second registration");
    }

    #[test]
    fn test_unregister_unknown_observer_should_be_noop() {
        // Given
        let mut observers = Observers::<Ticker, u32>::default();
        observers.register(Rc::new(listener("registered", 0)));
        let unknown: SharedObserver<Ticker, u32> = Rc::new(listener("unknown", 0));

        // When
        let result = observers.unregister(&unknown);

        // Then
        assert!(!result, "Should not remove anything");
        assert_eq!(vec!["registered"], observers.names());
    }

    #[test]
    fn test_notify_without_observers() {
        // Given
        let ticker = Ticker::default();

        // When
        ticker.notify_observers(3);

        // Then
        assert!(ticker.observers.is_empty());
    }
}
