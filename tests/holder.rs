use holdall::prelude::*;

#[test]
fn test_int_holder() {
    let mut holder = Holder::new();
    holder.set(1);
    assert_eq!(holder.get(), Some(&1));
}

#[test]
fn test_string_holder() {
    let mut holder = Holder::new();
    holder.set("hello");
    assert_eq!(holder.get().copied(), Some("hello"));

    let chars: Vec<char> = holder.get().map(|s| s.chars().collect()).unwrap();
    assert_eq!(chars, vec!['h', 'e', 'l', 'l', 'o']);
}

#[test]
fn test_last_write_wins() {
    let mut holder = Holder::new();
    for i in 0..10 {
        holder.set(i);
    }
    assert_eq!(holder.into_inner(), Some(9));
}

#[test]
fn test_independent_instantiations() {
    // two holders over different element types share no state
    let mut int_holder = Holder::new();
    let mut string_holder = Holder::new();
    int_holder.set(1);
    string_holder.set("hello");
    assert_eq!(int_holder.get(), Some(&1));
    assert_eq!(string_holder.get(), Some(&"hello"));
}

#[test]
fn test_borrowed_referent() {
    let text = String::from("hello");
    let mut holder = Holder::new();
    holder.set(text.as_str());
    assert_eq!(holder.get().copied(), Some("hello"));
}

#[test]
fn test_erased_holder_roundtrip() {
    let mut holder = ErasedHolder::new();
    holder.set(1_i32);
    assert_eq!(holder.get::<i32>(), Some(&1));
    assert_eq!(holder.get::<u32>(), None);

    holder.set("hello");
    assert!(holder.holds::<&str>());
    assert_eq!(holder.take::<&str>().unwrap(), "hello");
    assert!(!holder.is_set());
}
