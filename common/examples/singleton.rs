use std::thread;

use common::singleton::Singleton;

fn main() {
    let handles = (0..4)
        .map(|_| thread::spawn(|| Singleton::instance().do_something()))
        .collect::<Vec<_>>();

    for handle in handles {
        match handle.join() {
            Ok(count) => println!("Singleton called {count} time(s)"),
            Err(_) => eprintln!("Worker panicked"),
        }
    }
    println!("Total calls: {}", Singleton::instance().do_something());
}
