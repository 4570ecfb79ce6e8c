// Property-based tests for the calendar paging math
// Random dates, modes, and week starts against the invariants the paging
// controller promises

mod fixtures;

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use planner_calendar::calendar::{CalendarController, DisplayMode, Page};
use planner_calendar::utils::date::days_in_month;

use fixtures::RecordingDelegate;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=12, 1u32..=31)
        .prop_filter_map("day out of range for month", |(year, month, day)| {
            NaiveDate::from_ymd_opt(year, month, day)
        })
}

fn arb_mode() -> impl Strategy<Value = DisplayMode> {
    prop_oneof![Just(DisplayMode::Month), Just(DisplayMode::Week)]
}

fn arb_week_start() -> impl Strategy<Value = u8> {
    0u8..7
}

proptest! {
    /// Paging backward undoes paging forward, and the other way round
    #[test]
    fn prop_before_after_are_inverses(
        date in arb_date(),
        mode in arb_mode(),
        week_start in arb_week_start(),
    ) {
        let page = Page::containing(date, mode, week_start);
        prop_assert_eq!(page.after().before(), page);
        prop_assert_eq!(page.before().after(), page);
    }

    /// A page built around a date always contains it
    #[test]
    fn prop_page_contains_its_date(
        date in arb_date(),
        mode in arb_mode(),
        week_start in arb_week_start(),
    ) {
        let page = Page::containing(date, mode, week_start);
        prop_assert!(page.contains(date));
        prop_assert!(page.start() <= date && date <= page.end());
    }

    /// The grid is always rows x 7 consecutive days starting at grid_start
    #[test]
    fn prop_grid_is_contiguous(
        date in arb_date(),
        mode in arb_mode(),
        week_start in arb_week_start(),
    ) {
        let page = Page::containing(date, mode, week_start);
        let cells = page.cells();
        prop_assert_eq!(cells.len(), page.rows() as usize * 7);
        prop_assert_eq!(cells[0].date, page.grid_start());
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }

        let in_page = cells.iter().filter(|c| c.in_month).count();
        let expected = match mode {
            DisplayMode::Week => 7,
            DisplayMode::Month => days_in_month(page.start().year(), page.start().month()) as usize,
        };
        prop_assert_eq!(in_page, expected);
    }

    /// Toggling the display mode never moves the selection, and the new
    /// page is re-anchored around it
    #[test]
    fn prop_toggle_mode_preserves_selection(
        date in arb_date(),
        mode in arb_mode(),
        week_start in arb_week_start(),
    ) {
        let mut controller = CalendarController::new(date, mode, week_start);
        let mut delegate = RecordingDelegate::new();

        controller.toggle_mode(&mut delegate);
        prop_assert_eq!(controller.selected_date(), date);
        prop_assert!(controller.page().contains(date));

        controller.toggle_mode(&mut delegate);
        prop_assert_eq!(controller.selected_date(), date);
        prop_assert_eq!(controller.mode(), mode);
        prop_assert!(controller.page().contains(date));
    }

    /// After show_date the selection and the page agree
    #[test]
    fn prop_show_date_lands_inside_page(
        start in arb_date(),
        target in arb_date(),
        mode in arb_mode(),
        week_start in arb_week_start(),
    ) {
        let mut controller = CalendarController::new(start, mode, week_start);
        let mut delegate = RecordingDelegate::new();

        controller.show_date(target, &mut delegate);
        prop_assert_eq!(controller.selected_date(), target);
        prop_assert!(controller.page().contains(target));
        prop_assert_eq!(delegate.selected_dates(), vec![target]);
    }

    /// A completed forward swipe moves the selection into the new page,
    /// keeping the weekday slot (week) or the clamped day-of-month (month)
    #[test]
    fn prop_completed_transition_carries_selection(
        date in arb_date(),
        mode in arb_mode(),
        week_start in arb_week_start(),
    ) {
        let mut controller = CalendarController::new(date, mode, week_start);
        let mut delegate = RecordingDelegate::new();
        let target = controller.page_after(controller.page());

        controller.transition_will_begin(target);
        controller.transition_did_finish(true, target, &mut delegate);

        let carried = controller.selected_date();
        prop_assert_eq!(*controller.page(), target);
        prop_assert!(target.contains(carried));
        match mode {
            DisplayMode::Week => {
                prop_assert_eq!(carried.weekday(), date.weekday());
            }
            DisplayMode::Month => {
                let month_len = days_in_month(carried.year(), carried.month());
                prop_assert_eq!(carried.day(), date.day().min(month_len));
            }
        }
    }

    /// A cancelled swipe leaves no trace: no state change, no notification
    #[test]
    fn prop_cancelled_transition_is_a_no_op(
        date in arb_date(),
        mode in arb_mode(),
        week_start in arb_week_start(),
        forward in any::<bool>(),
    ) {
        let mut controller = CalendarController::new(date, mode, week_start);
        let page = *controller.page();
        let mut delegate = RecordingDelegate::new();

        let target = if forward {
            controller.page_after(&page)
        } else {
            controller.page_before(&page)
        };
        controller.transition_will_begin(target);
        controller.transition_did_finish(false, target, &mut delegate);

        prop_assert_eq!(controller.selected_date(), date);
        prop_assert_eq!(*controller.page(), page);
        prop_assert!(delegate.events.is_empty());
        prop_assert!(!controller.in_transition());
    }

    /// Walking n pages forward and n back returns to the starting page
    #[test]
    fn prop_paging_walk_round_trips(
        date in arb_date(),
        mode in arb_mode(),
        week_start in arb_week_start(),
        steps in 1usize..60,
    ) {
        let start = Page::containing(date, mode, week_start);
        let mut page = start;
        for _ in 0..steps {
            page = page.after();
        }
        for _ in 0..steps {
            page = page.before();
        }
        prop_assert_eq!(page, start);
    }
}
