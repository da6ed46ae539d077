// End-to-end integration tests for the DailyWell100 backend API
//
// Each test gets a fully isolated application instance: its own fixture
// origin (standing in for the static-JSON hosting and the chat upstream),
// its own key-value file, and its own listener on an ephemeral port. The
// fixture origin's per-document behavior is mutable, so tests can make any
// source fail, serve garbage, or answer with a specific status.
//
// Tests run in parallel by default.

mod test_health;
mod test_listing;
mod test_post;
mod test_preferences;
