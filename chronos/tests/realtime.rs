use chronos::Chronos;
use std::time::SystemTime;

#[test]
fn realtime() {
    // the realtime clock may jump backward or cross midnight, so we may need
    // to try a few times
    for _ in 0..5 {
        let t0 = SystemTime::now();
        let c1 = Chronos::now();
        let t2 = SystemTime::now();

        let c0 = Chronos::from_system_time(t0);
        let c2 = Chronos::from_system_time(t2);

        // skip readings that straddle midnight or a backward jump
        if t0 <= t2 && c0 <= c2 {
            assert!(c0 <= c1, "c0: {c0} c1: {c1}");
            assert!(c1 <= c2, "c1: {c1} c2: {c2}");
            return;
        }
    }
}

#[test]
fn now_matches_wall_clock() {
    for _ in 0..5 {
        let before = time::OffsetDateTime::now_utc();
        let now = Chronos::now();
        let after = time::OffsetDateTime::now_utc();

        let low = Chronos::from_wall_clock(before);
        let high = Chronos::from_wall_clock(after);

        if low <= high {
            assert!(low <= now && now <= high, "{low} <= {now} <= {high}");
            return;
        }
    }
}
