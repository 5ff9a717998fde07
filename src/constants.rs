pub const WINDOW_WIDTH: i32 = 1280;             // Initial window width (pixels)
pub const WINDOW_HEIGHT: i32 = 800;             // Initial window height (pixels)
pub const FPS: u32 = 60;                        // Frames per second

pub const AUTO_ADVANCE_INTERVAL: f32 = 5.0;     // Time between automatic slide changes (seconds)
pub const SWIPE_THRESHOLD: f32 = 50.0;          // Minimum horizontal drag to count as a swipe (pixels)

pub const PANEL_PADDING: f32 = 12.0;            // Gap around and between carousel rows (pixels)
pub const CONTROL_WIDTH: f32 = 44.0;            // Hit width of the prev/next chevrons (pixels)
pub const CONTROL_HEIGHT: f32 = 64.0;           // Hit height of the prev/next chevrons (pixels)
pub const INDICATOR_RADIUS: f32 = 6.0;          // Radius of an indicator dot (pixels)
pub const INDICATOR_SPACING: f32 = 22.0;        // Center-to-center distance between dots (pixels)
pub const INDICATOR_MARGIN: f32 = 18.0;         // Distance from dot row to the bottom edge (pixels)
pub const LABEL_FONT_SIZE: i32 = 18;            // Album label text size

pub const TOAST_SLIDE_DURATION: f32 = 0.3;      // Time for a toast to slide in or out (seconds)
pub const TOAST_DISPLAY_DURATION: f32 = 5.0;    // Time a toast rests on screen (seconds)
pub const TOAST_WIDTH: f32 = 340.0;             // Toast box width (pixels)
pub const TOAST_HEIGHT: f32 = 44.0;             // Toast box height (pixels)
pub const TOAST_MARGIN: f32 = 20.0;             // Gap from the window edges and between toasts (pixels)
pub const TOAST_FONT_SIZE: i32 = 16;            // Toast message text size
