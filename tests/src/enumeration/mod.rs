mod equivalence;
mod lifecycle;
mod util;
