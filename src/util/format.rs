//! Duration formatting utilities
//!
//! Maps counts of minutes or seconds to the `MM:SS` strings shown by the
//! timer screen and plain-mode progress bar.

/// Format a whole number of minutes as `MM:00`
///
/// # Examples
/// ```
/// use pomodoro::util::format::minutes_to_duration;
///
/// assert_eq!(minutes_to_duration(25), "25:00");
/// assert_eq!(minutes_to_duration(5), "05:00");
/// ```
pub fn minutes_to_duration(minutes: u32) -> String {
    format!("{:02}:00", minutes)
}

/// Format a number of seconds as `MM:SS`
///
/// Minutes are not wrapped into hours; an hour-long focus session reads `60:00`.
///
/// # Examples
/// ```
/// use pomodoro::util::format::seconds_to_duration;
///
/// assert_eq!(seconds_to_duration(1499), "24:59");
/// assert_eq!(seconds_to_duration(0), "00:00");
/// ```
pub fn seconds_to_duration(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
