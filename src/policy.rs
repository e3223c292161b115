//! Architecture policy compilation.
//!
//! A policy string lists the architectures a machine accepts, most preferred
//! first, joined by one of three relations:
//!
//! ```text
//! a = b    a and b are equivalent
//! a > b    a is better; the resolver may switch a -> b but never b -> a
//! a : b    a is better; the resolver must not switch between them at all
//! ```
//!
//! Compiling turns that string into a dense side array keyed by interned
//! architecture [`Id`](crate::Id):
//!
//! ```text
//! "x86_64:i686>i586=i486"
//!        │
//!        │  Lexer                          (lexer.rs)
//!        v
//! [x86_64 (first), i686 (:), i586 (>), i486 (=)]
//!        │
//!        │  compile                        (compiler.rs)
//!        v
//! slot[noarch]  = (0,1)
//! slot[x86_64]  = (1,1)
//! slot[i686]    = (2,1)
//! slot[i586]    = (2,2)
//! slot[i486]    = (2,2)
//! slot[<other>] = None                    extent = highest id + headroom
//! ```
//!
//! The word-size classifier (`color.rs`) runs on top of the compiled table:
//! its cache is sized to the table extent and reset whenever the policy is
//! replaced.
//!
//! ## Responsibilities by module
//!
//! - `lexer.rs`: splits a policy into tokens, each tagged with the relation
//!   that precedes it.
//! - `compiler.rs`: builds [`ArchPolicy`] from the token stream.
//! - `color.rs`: word-size classification and its lazily grown cache.
//! - `stats.rs`: counters collected while compiling.

#[path = "policy/color.rs"]
mod color;
#[path = "policy/compiler.rs"]
mod compiler;
#[path = "policy/lexer.rs"]
mod lexer;
#[path = "policy/stats.rs"]
mod stats;


pub(crate) use color::ColorCache;
pub use compiler::ArchPolicy;
pub(crate) use compiler::compile;
pub use lexer::Relation;
pub use stats::CompileStats;
