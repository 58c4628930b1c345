/// Putting new records or replacing existing ones.
pub mod put_item;
