mod identity_resolver_impl;

pub use identity_resolver_impl::*;
