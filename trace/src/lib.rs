/*!
Package span_status models the status of a finished span: a canonical code
and an optional description.

The following assumes a basic familiarity with distributed tracing concepts.
See https://opentelemetry.io


### Creating a Status

Most spans end with one of three statuses. These are built once and shared,
so fetching them never allocates a new Status:

```rust
use span_status::{Status, StatusCanonicalCode};

let status = Status::create(StatusCanonicalCode::Ok, None);
assert_eq!(status, Status::ok());
```

Supplying a description always builds a new Status:

```rust
use span_status::{Status, StatusCanonicalCode};

let status = Status::create(
    StatusCanonicalCode::Error,
    Some("timeout contacting upstream"),
);
assert_eq!(status.description(), Some("timeout contacting upstream"));
assert_ne!(status, Status::error());
```

Compare statuses by value. Whether two statuses share an allocation is not
part of the API.

### Newer code sets

The set of canonical codes belongs to the tracing API and can grow faster
than this crate. A StatusRegistry enumerates its code set at runtime and
builds a template for every member, not just the ones named by the
CanonicalCode trait.
*/
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod config;
mod registry;
mod status;
mod status_codes;

pub use crate::config::Config;
pub use crate::registry::{global_registry, Iter, StatusRegistry};
pub use crate::status::Status;
pub use crate::status_codes::{CanonicalCode, StatusCanonicalCode, StatusCodeError};
