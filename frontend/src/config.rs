/// How long the simulated booking round trip takes.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

#[cfg(debug_assertions)]
pub fn get_booking_endpoint() -> Option<&'static str> {
    None  // Local builds always simulate the booking request
}

#[cfg(not(debug_assertions))]
pub fn get_booking_endpoint() -> Option<&'static str> {
    // Set at build time once a booking backend exists
    option_env!("PIXBOOTH_BOOKING_ENDPOINT").filter(|url| !url.is_empty())
}
