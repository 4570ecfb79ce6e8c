// Calendar paging controller
// Translates mode toggles, swipe transitions, and programmatic date jumps
// into a consistent (mode, selected date, page) triple, and reports
// selection/resize/filter events to a delegate owned by the rendering layer.

use chrono::NaiveDate;

use super::page::Page;
use super::DisplayMode;

/// Observer interface implemented by the screen that hosts the calendar.
///
/// All callbacks arrive on the UI thread, in event order. `calendar_count`
/// is a pull: `None` means "show the filter affordance without a badge".
#[cfg_attr(test, mockall::automock)]
pub trait CalendarDelegate {
    fn date_selected(&mut self, date: NaiveDate);
    fn transitioned_to(&mut self, date: NaiveDate);
    fn resized(&mut self, height: f32, animated: bool);
    fn filter_requested(&mut self);
    fn calendar_count(&self) -> Option<usize>;
}

/// State machine behind the paged day grid.
///
/// The selected date is the single source of truth; the visible page is
/// re-derived around it and always contains it. Month and year labels are
/// derived from the selected date by the rendering layer, never stored here.
pub struct CalendarController {
    mode: DisplayMode,
    selected: NaiveDate,
    page: Page,
    /// Target of an in-flight swipe; also serializes gestures: a new swipe
    /// is not accepted until the previous one reports did-finish.
    pending: Option<Page>,
    first_day_of_week: u8,
}

impl CalendarController {
    pub fn new(selected: NaiveDate, mode: DisplayMode, first_day_of_week: u8) -> Self {
        Self {
            mode,
            selected,
            page: Page::containing(selected, mode, first_day_of_week),
            pending: None,
            first_day_of_week,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn in_transition(&self) -> bool {
        self.pending.is_some()
    }

    /// Flip Month<->Week, re-anchoring the page around the selected date.
    /// The selected date itself never changes; the delegate always receives
    /// the new page height because the two modes differ in height.
    pub fn toggle_mode<D: CalendarDelegate + ?Sized>(&mut self, delegate: &mut D) {
        self.mode = self.mode.toggled();
        self.pending = None;
        self.page = Page::containing(self.selected, self.mode, self.first_day_of_week);
        log::debug!(
            "display mode now {:?}, page {}..{}",
            self.mode,
            self.page.start(),
            self.page.end()
        );
        delegate.resized(self.page.height(), true);
    }

    /// Force the selection to `date`, re-anchoring the page if needed.
    pub fn show_date<D: CalendarDelegate + ?Sized>(&mut self, date: NaiveDate, delegate: &mut D) {
        self.selected = date;
        delegate.date_selected(date);
        if !self.page.contains(date) {
            self.move_page_to(date, delegate);
        }
    }

    /// The page one unit (week or month) before `page`.
    pub fn page_before(&self, page: &Page) -> Page {
        page.before()
    }

    /// The page one unit (week or month) after `page`.
    pub fn page_after(&self, page: &Page) -> Page {
        page.after()
    }

    /// A swipe toward `target` has started. Nothing is committed yet; the
    /// swipe may still be cancelled. A second gesture while one is in
    /// flight is ignored.
    pub fn transition_will_begin(&mut self, target: Page) {
        if self.pending.is_some() {
            log::warn!("page transition already in flight, ignoring new gesture");
            return;
        }
        log::debug!("transition begins toward {}", target.start());
        self.pending = Some(target);
    }

    /// The swipe ended. A cancelled swipe (`completed == false`) leaves all
    /// state untouched and fires nothing. A completed swipe carries the
    /// selection into `new_page` (same weekday slot for weeks, same clamped
    /// day-of-month for months) and reports the new selection and height.
    pub fn transition_did_finish<D: CalendarDelegate + ?Sized>(
        &mut self,
        completed: bool,
        new_page: Page,
        delegate: &mut D,
    ) {
        let pending = self.pending.take();
        if !completed {
            log::debug!("transition cancelled, staying on {}", self.page.start());
            return;
        }
        if pending.is_none() {
            // The presented page is authoritative even if the begin
            // notification was never seen.
            log::warn!("transition finished without a matching begin");
        }
        self.selected = new_page.carry_selection(&self.page, self.selected);
        self.page = new_page;
        log::debug!(
            "transitioned to page {}..{}, selected {}",
            self.page.start(),
            self.page.end(),
            self.selected
        );
        delegate.transitioned_to(self.selected);
        delegate.resized(self.page.height(), true);
    }

    /// The user tapped a day cell. The page only moves in the defensive
    /// case where the tapped date is somehow outside it.
    pub fn day_selected<D: CalendarDelegate + ?Sized>(
        &mut self,
        date: NaiveDate,
        delegate: &mut D,
    ) {
        self.selected = date;
        delegate.date_selected(date);
        if !self.page.contains(date) {
            log::warn!("selected day {} outside visible page, re-anchoring", date);
            self.move_page_to(date, delegate);
        }
    }

    /// The user activated the filter affordance. Pure notification.
    pub fn filter_activated<D: CalendarDelegate + ?Sized>(&mut self, delegate: &mut D) {
        delegate.filter_requested();
    }

    /// Apply a changed week-start setting. The anchor of a Week page and
    /// the fill-day count of a Month page both depend on it, so the page is
    /// re-derived around the (unchanged) selected date.
    pub fn set_first_day_of_week<D: CalendarDelegate + ?Sized>(
        &mut self,
        first_day_of_week: u8,
        delegate: &mut D,
    ) {
        if first_day_of_week == self.first_day_of_week {
            return;
        }
        let old_height = self.page.height();
        self.first_day_of_week = first_day_of_week;
        self.page = Page::containing(self.selected, self.mode, first_day_of_week);
        if self.page.height() != old_height {
            delegate.resized(self.page.height(), false);
        }
    }

    fn move_page_to<D: CalendarDelegate + ?Sized>(&mut self, date: NaiveDate, delegate: &mut D) {
        let old_height = self.page.height();
        self.page = Page::containing(date, self.mode, self.first_day_of_week);
        delegate.transitioned_to(date);
        if self.page.height() != old_height {
            delegate.resized(self.page.height(), true);
        }
    }
}
