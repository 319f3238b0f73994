//! C ABI over the embedded city dataset, for non-Rust frontends loading
//! this crate as a shared library.
//!
//! Every call is self-contained and rebuilds its state from the dataset,
//! so the surface holds no process-wide mutable state. The only value
//! whose ownership crosses the boundary is [`RouteResult`]: the caller
//! must release it exactly once via [`citywalk_release_route_result`].

use crate::dataset::city;
use crate::router::Router;

use std::ffi::{c_char, c_int};
use tracing::debug;

/// Route handed across the C boundary: a heap-allocated id sequence in
/// origin -> destination order plus the total distance in meters.
#[repr(C)]
pub struct RouteResult {
    pub ids: *mut c_int,
    pub len: c_int,
    pub total_distance: c_int,
}

/// Computes the shortest route between two vertex ids of the city map.
///
/// Returns null on any failure (trivial route, invalid or unknown id,
/// unreachable destination). A non-null result must be passed to
/// [`citywalk_release_route_result`] exactly once.
#[unsafe(no_mangle)]
pub extern "C" fn citywalk_compute_route(
    origin_id: c_int,
    destination_id: c_int,
) -> *mut RouteResult {
    let router = Router::new(city::dataset());
    match router.compute_route(origin_id, destination_id) {
        Ok(route) => {
            let len = route.vertex_ids.len() as c_int;
            let ids = Box::leak(route.vertex_ids.into_boxed_slice()).as_mut_ptr();
            Box::into_raw(Box::new(RouteResult {
                ids,
                len,
                total_distance: route.total_distance as c_int,
            }))
        }
        Err(err) => {
            debug!(origin_id, destination_id, %err, "route request failed");
            std::ptr::null_mut()
        }
    }
}

/// Releases a route result returned by [`citywalk_compute_route`].
/// No-op on null.
///
/// # Safety
///
/// `result` must be null or a pointer obtained from
/// [`citywalk_compute_route`] that has not been released before.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn citywalk_release_route_result(result: *mut RouteResult) {
    if result.is_null() {
        return;
    }
    let result = unsafe { Box::from_raw(result) };
    if !result.ids.is_null() {
        let ids = std::ptr::slice_from_raw_parts_mut(result.ids, result.len as usize);
        drop(unsafe { Box::from_raw(ids) });
    }
}

/// Total number of vertices in the city dataset. Never fails.
#[unsafe(no_mangle)]
pub extern "C" fn citywalk_vertex_count() -> c_int {
    city::dataset().vertices().len() as c_int
}

/// Looks up a vertex by id and copies its attributes into the caller's
/// buffers. Returns 0 on success, -1 when the id is unknown.
///
/// # Safety
///
/// Each non-null string output must point to a writable buffer of at
/// least the paired length in bytes; each non-null coordinate output must
/// point to a writable `c_int`. Null outputs are skipped.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn citywalk_vertex_info(
    id: c_int,
    name_out: *mut c_char,
    name_len: c_int,
    category_out: *mut c_char,
    category_len: c_int,
    x_out: *mut c_int,
    y_out: *mut c_int,
) -> c_int {
    let dataset = city::dataset();
    let Some(vertex) = dataset.vertex_by_id(id) else {
        return -1;
    };
    unsafe {
        copy_str(&vertex.name, name_out, name_len);
        copy_str(&vertex.category, category_out, category_len);
        write_int(vertex.x, x_out);
        write_int(vertex.y, y_out);
    }
    0
}

/// Copies the street label of a vertex into the caller's buffer.
/// Returns 0 on success, -1 when the id is unknown.
///
/// # Safety
///
/// `street_out`, if non-null, must point to a writable buffer of at least
/// `street_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn citywalk_vertex_street(
    id: c_int,
    street_out: *mut c_char,
    street_len: c_int,
) -> c_int {
    let dataset = city::dataset();
    let Some(vertex) = dataset.vertex_by_id(id) else {
        return -1;
    };
    unsafe { copy_str(&vertex.street, street_out, street_len) };
    0
}

/// Number of points of interest in the city dataset. Never fails.
#[unsafe(no_mangle)]
pub extern "C" fn citywalk_poi_count() -> c_int {
    Router::new(city::dataset()).poi_count() as c_int
}

/// Looks up the `index`-th point of interest (zero-based, POIs only) and
/// copies its attributes into the caller's buffers. Returns 0 on success,
/// -1 when the index is out of range.
///
/// # Safety
///
/// Same buffer contract as [`citywalk_vertex_info`]; `id_out`, if
/// non-null, must point to a writable `c_int`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn citywalk_poi_info(
    index: c_int,
    id_out: *mut c_int,
    name_out: *mut c_char,
    name_len: c_int,
    category_out: *mut c_char,
    category_len: c_int,
    x_out: *mut c_int,
    y_out: *mut c_int,
) -> c_int {
    if index < 0 {
        return -1;
    }
    let router = Router::new(city::dataset());
    let Ok(poi) = router.poi_info(index as usize) else {
        return -1;
    };
    unsafe {
        write_int(poi.id, id_out);
        copy_str(&poi.name, name_out, name_len);
        copy_str(&poi.category, category_out, category_len);
        write_int(poi.x, x_out);
        write_int(poi.y, y_out);
    }
    0
}

/// Byte-copies `s` into the caller's buffer, truncated and
/// NUL-terminated. Skipped when the buffer is null or empty.
unsafe fn copy_str(s: &str, out: *mut c_char, len: c_int) {
    if out.is_null() || len <= 0 {
        return;
    }
    let out = unsafe { std::slice::from_raw_parts_mut(out as *mut u8, len as usize) };
    let n = s.len().min(out.len() - 1);
    out[..n].copy_from_slice(&s.as_bytes()[..n]);
    out[n] = 0;
}

unsafe fn write_int(value: i32, out: *mut c_int) {
    if !out.is_null() {
        unsafe { *out = value };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_null_is_noop() {
        unsafe { citywalk_release_route_result(std::ptr::null_mut()) };
    }

    #[test]
    fn compute_and_release_round_trip() {
        // 0 -> 119 -> 20 exists in the city dataset
        let result = citywalk_compute_route(0, 20);
        assert!(!result.is_null());

        unsafe {
            let ids = std::slice::from_raw_parts((*result).ids, (*result).len as usize);
            assert_eq!(ids.first(), Some(&0));
            assert_eq!(ids.last(), Some(&20));
            assert!((*result).total_distance > 0);
            citywalk_release_route_result(result);
        }
    }

    #[test]
    fn failed_route_returns_null() {
        assert!(citywalk_compute_route(0, 0).is_null());
        assert!(citywalk_compute_route(-1, 5).is_null());
        assert!(citywalk_compute_route(0, 9999).is_null());
    }

    #[test]
    fn vertex_info_copies_and_truncates() {
        let mut name = [0 as c_char; 8];
        let mut category = [0 as c_char; 64];
        let (mut x, mut y) = (0, 0);

        let rc = unsafe {
            citywalk_vertex_info(
                0,
                name.as_mut_ptr(),
                name.len() as c_int,
                category.as_mut_ptr(),
                category.len() as c_int,
                &mut x,
                &mut y,
            )
        };
        assert_eq!(rc, 0);
        // "Esquina A" truncated to 7 bytes + NUL
        let bytes: Vec<u8> = name.iter().take_while(|&&b| b != 0).map(|&b| b as u8).collect();
        assert_eq!(bytes, b"Esquina");
        assert_eq!((x, y), (23, 148));

        let rc = unsafe {
            citywalk_vertex_info(
                9999,
                name.as_mut_ptr(),
                name.len() as c_int,
                category.as_mut_ptr(),
                category.len() as c_int,
                &mut x,
                &mut y,
            )
        };
        assert_eq!(rc, -1);
    }

    #[test]
    fn poi_listing_matches_dataset() {
        let count = citywalk_poi_count();
        assert_eq!(count, 98);

        let mut id = -1;
        let rc = unsafe {
            citywalk_poi_info(
                0,
                &mut id,
                std::ptr::null_mut(),
                0,
                std::ptr::null_mut(),
                0,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            )
        };
        assert_eq!(rc, 0);
        // first POI record in dataset order
        assert_eq!(id, 22);

        let rc = unsafe {
            citywalk_poi_info(
                count,
                &mut id,
                std::ptr::null_mut(),
                0,
                std::ptr::null_mut(),
                0,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            )
        };
        assert_eq!(rc, -1);
    }
}
