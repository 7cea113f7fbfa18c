//! The mode state machine.
//!
//! Owns the long-lived menu screen, the single slot holding the current
//! non-menu screen, the touch filter and the mode-change vote counter.
//! One call to [`UiController::run_tick`] services one scheduling tick:
//! poll the filter, dispatch an accepted touch to the active screen, then
//! run the screen's per-turn step whether or not a touch arrived.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::config::TOUCHPAINT_TIME_SENSITIVITY_MS;
use crate::hal::Board;
use crate::telemetry;
use crate::touch::{map_to_display, FilterThresholds, TouchCalibration, TouchFilter, TouchSample};

use super::screens::MenuScreen;
use super::{ActiveScreen, Screen, ScreenEnv, UiMode};

pub struct UiController {
    mode: UiMode,
    menu: MenuScreen,
    /// The current non-menu screen. `None` exactly while `mode == Menu`;
    /// constructed on mode entry and dropped on exit, never retained
    /// across a transition away and back.
    active: Option<ActiveScreen>,
    filter: TouchFilter,
    calibration: TouchCalibration,
    vote_count: u8,
    vote_threshold: u8,
    /// The console-configured time gate; touchpaint temporarily overrides
    /// it while active.
    configured_time_sensitivity_ms: u64,
    provisioned: bool,
}

impl UiController {
    pub fn new(start_mode: UiMode, thresholds: FilterThresholds, vote_threshold: u8) -> Self {
        let configured_time_sensitivity_ms = thresholds.time_sensitivity_ms;
        let mut controller = Self {
            mode: start_mode,
            menu: MenuScreen::new(),
            active: ActiveScreen::for_mode(start_mode),
            filter: TouchFilter::new(thresholds),
            calibration: TouchCalibration::for_board(),
            vote_count: 0,
            vote_threshold: vote_threshold.max(1),
            configured_time_sensitivity_ms,
            provisioned: false,
        };
        controller.apply_time_sensitivity();
        controller
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn vote_count(&self) -> u8 {
        self.vote_count
    }

    pub fn menu(&self) -> &MenuScreen {
        &self.menu
    }

    /// True while the long-lived menu screen is the active one.
    pub fn menu_is_active(&self) -> bool {
        self.active.is_none()
    }

    pub fn filter(&self) -> &TouchFilter {
        &self.filter
    }

    pub fn is_provisioned(&self) -> bool {
        self.provisioned
    }

    /// First draw after construction.
    pub fn begin<B: Board>(&mut self, board: &mut B) {
        self.redraw(board);
    }

    /// One scheduling tick: poll, dispatch, run the per-turn step.
    pub fn run_tick<B: Board>(&mut self, board: &mut B, now_ms: u64) {
        if let Some(sample) = self.poll_touch(board, now_ms) {
            self.dispatch_touch(board, sample);
        }

        match &mut self.active {
            Some(screen) => screen.run_each_turn(board),
            None => self.menu.run_each_turn(board),
        }
    }

    /// External one-shot setup-completion signal; screens that care redraw.
    pub fn set_provisioned<B: Board>(&mut self, board: &mut B) {
        if self.provisioned {
            return;
        }
        self.provisioned = true;
        log::info!("provisioned");
        self.redraw(board);
    }

    /// Switch to a numeric mode from an untrusted source. Unknown values
    /// are logged and coerced to the menu.
    pub fn request_mode_raw<B: Board>(&mut self, board: &mut B, raw: u8) {
        let target = match UiMode::from_u8(raw) {
            Some(mode) => mode,
            None => {
                log::warn!("invalid ui mode {raw}, falling back to menu");
                telemetry::record_invalid_mode();
                UiMode::Menu
            }
        };
        self.transition(board, target);
    }

    pub fn set_vote_threshold(&mut self, votes: u8) {
        self.vote_threshold = votes.max(1);
    }

    pub fn set_time_sensitivity_ms(&mut self, ms: u64) {
        self.configured_time_sensitivity_ms = ms;
        self.apply_time_sensitivity();
    }

    pub fn set_dist_sensitivity(&mut self, units: u16) {
        self.filter.set_dist_sensitivity(units);
    }

    pub fn set_treat_as_new_ms(&mut self, ms: u64) {
        self.filter.set_treat_as_new_ms(ms);
    }

    fn poll_touch<B: Board>(&mut self, board: &mut B, now_ms: u64) -> Option<TouchSample> {
        let reading = if board.touched() {
            Some(board.read_point())
        } else {
            return None;
        };

        match self.filter.poll(now_ms, reading) {
            Some(sample) => {
                telemetry::record_touch_accepted();
                Some(sample)
            }
            None => {
                telemetry::record_touch_rejected();
                None
            }
        }
    }

    fn dispatch_touch<B: Board>(&mut self, board: &mut B, sample: TouchSample) {
        let size = board.display().size();
        let point = map_to_display(
            sample,
            &self.calibration,
            size.width as i32,
            size.height as i32,
        );

        let hot_zone_hit = match &mut self.active {
            Some(screen) => screen.handle_touch(board, point),
            None => self.menu.handle_touch(board, point),
        };
        if !hot_zone_hit {
            return;
        }

        self.vote_count += 1;
        if self.vote_count < self.vote_threshold {
            return;
        }
        self.change_mode(board);
    }

    /// A committed switch request. Out of the menu the target is whatever
    /// the menu recorded (or the menu itself when nothing registered); out
    /// of any other screen the target is always the menu.
    fn change_mode<B: Board>(&mut self, board: &mut B) {
        let target = if self.mode == UiMode::Menu {
            self.menu.take_selected().unwrap_or(UiMode::Menu)
        } else {
            UiMode::Menu
        };
        self.transition(board, target);
    }

    fn transition<B: Board>(&mut self, board: &mut B, target: UiMode) {
        log::debug!("mode change {} -> {}", self.mode.name(), target.name());
        self.vote_count = 0;

        // Dropping the old value here is what destroys a non-menu screen on
        // exit; the menu is reused by reference, never rebuilt.
        self.active = ActiveScreen::for_mode(target);

        self.redraw(board);
        self.mode = target;
        self.apply_time_sensitivity();
        telemetry::record_mode_transition();
    }

    fn redraw<B: Board>(&mut self, board: &mut B) {
        let env = ScreenEnv {
            provisioned: self.provisioned,
        };
        let _ = board.display().clear(Rgb565::BLACK);
        match &mut self.active {
            Some(screen) => screen.draw(board, &env),
            None => self.menu.draw(board, &env),
        }
    }

    fn apply_time_sensitivity(&mut self) {
        // The transition target is already in `self.mode` when this runs.
        let effective = if self.active_mode_is_touchpaint() {
            TOUCHPAINT_TIME_SENSITIVITY_MS
        } else {
            self.configured_time_sensitivity_ms
        };
        self.filter.set_time_sensitivity_ms(effective);
    }

    fn active_mode_is_touchpaint(&self) -> bool {
        matches!(self.active, Some(ActiveScreen::Touchpaint(_)))
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::geometry::Point;

    use super::*;
    use crate::board;
    use crate::config::{
        BOX_SIZE, DEFAULT_TIME_SENSITIVITY_MS, MENU_ROW_HEIGHT, MENU_TOP, SCREEN_WIDTH,
    };
    use crate::hal::AccelReading;
    use crate::ui::testing::TestBoard;

    fn thresholds() -> FilterThresholds {
        FilterThresholds {
            time_sensitivity_ms: DEFAULT_TIME_SENSITIVITY_MS,
            dist_sensitivity: 200,
            treat_as_new_ms: 600,
            pressure_floor: board::TOUCH_PRESSURE_FLOOR,
        }
    }

    /// Invert the display mapping so tests can aim at screen coordinates.
    fn raw_for(point: Point) -> TouchSample {
        let cal = TouchCalibration::for_board();
        let span_x = (cal.max_x - cal.min_x) as f32;
        let span_y = (cal.max_y - cal.min_y) as f32;
        let raw_y = cal.max_x as f32 - point.x as f32 * span_x / SCREEN_WIDTH as f32;
        let raw_x = cal.max_y as f32 - point.y as f32 * span_y / 480.0;
        TouchSample::new(raw_x as u16, raw_y as u16, 1_000)
    }

    fn tap(controller: &mut UiController, board: &mut TestBoard, now_ms: u64, point: Point) {
        board.sample = Some(raw_for(point));
        controller.run_tick(board, now_ms);
        board.sample = None;
    }

    fn switcher_point() -> Point {
        Point::new(300, 20)
    }

    fn menu_row_point(row: i32) -> Point {
        Point::new(
            SCREEN_WIDTH / 2,
            MENU_TOP + row * MENU_ROW_HEIGHT + MENU_ROW_HEIGHT / 2,
        )
    }

    #[test]
    fn raw_for_round_trips_into_the_intended_zone() {
        let sample = raw_for(switcher_point());
        let point = map_to_display(sample, &TouchCalibration::for_board(), SCREEN_WIDTH, 480);
        assert!(point.y < BOX_SIZE && point.x > BOX_SIZE * 7, "{point:?}");
    }

    #[test]
    fn menu_round_trip_reuses_the_menu_screen() {
        let mut board = TestBoard::new();
        let mut controller = UiController::new(UiMode::Menu, thresholds(), 1);
        controller.begin(&mut board);
        assert!(controller.menu_is_active());

        // Row 1 is the testcard entry; leaving the menu goes there.
        tap(&mut controller, &mut board, 0, menu_row_point(1));
        assert_eq!(controller.mode(), UiMode::Testcard);
        assert!(!controller.menu_is_active());

        // Any hot-zone hit outside the menu returns to it; the non-menu
        // slot empties and the same long-lived menu value (with its
        // remembered selection) is what draws again.
        tap(&mut controller, &mut board, 1_000, switcher_point());
        assert_eq!(controller.mode(), UiMode::Menu);
        assert!(controller.menu_is_active());
        assert_eq!(controller.menu().last_selected(), Some(UiMode::Testcard));
    }

    #[test]
    fn vote_threshold_gates_the_transition() {
        let mut board = TestBoard::new();
        let mut controller = UiController::new(UiMode::Menu, thresholds(), 3);
        controller.begin(&mut board);

        tap(&mut controller, &mut board, 0, menu_row_point(0));
        tap(&mut controller, &mut board, 1_000, menu_row_point(0));
        assert_eq!(controller.mode(), UiMode::Menu);
        assert_eq!(controller.vote_count(), 2);

        tap(&mut controller, &mut board, 2_000, menu_row_point(0));
        assert_eq!(controller.mode(), UiMode::Configure);
        assert_eq!(controller.vote_count(), 0);
    }

    #[test]
    fn rejected_touches_never_reach_the_screens() {
        let mut board = TestBoard::new();
        let mut controller = UiController::new(UiMode::Menu, thresholds(), 1);
        controller.begin(&mut board);

        tap(&mut controller, &mut board, 0, menu_row_point(0));
        assert_eq!(controller.mode(), UiMode::Configure);

        // Inside the time gate: the switcher tap is swallowed.
        tap(&mut controller, &mut board, 50, switcher_point());
        assert_eq!(controller.mode(), UiMode::Configure);

        tap(&mut controller, &mut board, 1_050, switcher_point());
        assert_eq!(controller.mode(), UiMode::Menu);
    }

    #[test]
    fn leaving_the_menu_without_a_selection_stays_on_the_menu() {
        let mut board = TestBoard::new();
        let mut controller = UiController::new(UiMode::Menu, thresholds(), 1);
        controller.begin(&mut board);

        controller.request_mode_raw(&mut board, UiMode::Menu.as_u8());
        assert_eq!(controller.mode(), UiMode::Menu);
        assert!(controller.menu_is_active());
    }

    #[test]
    fn invalid_numeric_mode_is_coerced_to_menu_and_recorded() {
        let mut board = TestBoard::new();
        let mut controller = UiController::new(UiMode::Testcard, thresholds(), 1);
        controller.begin(&mut board);

        let before = telemetry::invalid_mode_coercions();
        controller.request_mode_raw(&mut board, 99);
        assert_eq!(controller.mode(), UiMode::Menu);
        assert!(controller.menu_is_active());
        assert!(telemetry::invalid_mode_coercions() > before);
    }

    #[test]
    fn touchpaint_swaps_the_time_gate_and_leaving_restores_it() {
        let mut board = TestBoard::new();
        let mut controller = UiController::new(UiMode::Menu, thresholds(), 1);
        controller.begin(&mut board);

        tap(&mut controller, &mut board, 0, menu_row_point(2));
        assert_eq!(controller.mode(), UiMode::Touchpaint);
        assert_eq!(controller.filter().thresholds().time_sensitivity_ms, 25);

        tap(&mut controller, &mut board, 1_000, switcher_point());
        assert_eq!(controller.mode(), UiMode::Menu);
        assert_eq!(
            controller.filter().thresholds().time_sensitivity_ms,
            DEFAULT_TIME_SENSITIVITY_MS
        );
    }

    #[test]
    fn per_turn_step_runs_without_touches() {
        let mut board = TestBoard::new();
        board.accel = AccelReading {
            x: 0.0,
            y: 3.0,
            z: 9.8,
        };
        let mut controller = UiController::new(UiMode::EtchASketch, thresholds(), 1);
        controller.begin(&mut board);

        controller.run_tick(&mut board, 0);
        controller.run_tick(&mut board, 10);
        match &controller.active {
            Some(ActiveScreen::EtchASketch(etch)) => {
                assert_eq!(etch.pen().y, 480 / 2 + 2);
            }
            other => panic!(
                "expected the etch-a-sketch screen, got menu_active={}",
                other.is_none()
            ),
        }
    }

    #[test]
    fn provisioning_is_one_shot() {
        let mut board = TestBoard::new();
        let mut controller = UiController::new(UiMode::Configure, thresholds(), 1);
        controller.begin(&mut board);

        assert!(!controller.is_provisioned());
        controller.set_provisioned(&mut board);
        controller.set_provisioned(&mut board);
        assert!(controller.is_provisioned());
    }
}
