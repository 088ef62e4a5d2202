//! Confirmation-number scheme for submitted records: a fixed prefix plus
//! the last eight digits of the epoch-millisecond clock. The clock value is
//! passed in by the caller (the frontend reads it from `js_sys::Date`).

pub fn confirmation_number(now_millis: u64) -> String {
    format!("IR-{:08}", now_millis % 100_000_000)
}

#[cfg(test)]
mod tests {
    use super::confirmation_number;

    #[test]
    fn uses_last_eight_digits_of_the_clock() {
        assert_eq!(confirmation_number(1_771_234_567_890), "IR-34567890");
    }

    #[test]
    fn zero_pads_small_clock_values() {
        assert_eq!(confirmation_number(42), "IR-00000042");
        assert_eq!(confirmation_number(42).len(), "IR-".len() + 8);
    }
}
