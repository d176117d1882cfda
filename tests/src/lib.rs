//! Cross-crate behaviour of the enumeration clients.

#[cfg(test)]
mod enumeration;
