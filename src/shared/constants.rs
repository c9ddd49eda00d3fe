/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// HANDICAP
// =============================================================================

/// Handicap values are stored with one decimal place; bounds are in tenths.
pub const HCP_MIN_TENTHS: i64 = -100;
pub const HCP_MAX_TENTHS: i64 = 540;

/// Handicap given to new players who do not provide one (54.0)
pub const DEFAULT_HCP_TENTHS: i64 = 540;

// =============================================================================
// COURSE DATA
// =============================================================================

pub const MIN_SLOPE_RATING: i32 = 55;
pub const MAX_SLOPE_RATING: i32 = 155;

/// Course ratings must lie strictly between 0 and this value
pub const MAX_COURSE_RATING: i64 = 100;

// =============================================================================
// LOCATION SEARCH
// =============================================================================

/// Default search radius in metres for nearby establishments
pub const DEFAULT_SEARCH_RADIUS_METERS: f64 = 1000.0;

/// Upper bound for the nearby establishments radius
pub const MAX_SEARCH_RADIUS_METERS: f64 = 50_000.0;
