//! C ABI over the label-correcting engine.
//!
//! Networks and search buffers are opaque handles created once and reused
//! for every origin. Index arrays are `int`, costs are `double`, allowed
//! uses are NUL-terminated UTF-8 strings. Results are copied into
//! caller-owned arrays of length `node_size`, with `-1` for "no predecessor".
//! Every entry point returns one of the `PE_*` status codes.

use std::ffi::CStr;
use std::ptr;
use std::slice;

use libc::{c_char, c_double, c_int};

use crate::algorithm::label_correcting::{LabelCorrecting, SearchBuffers};
use crate::algorithm::ThruNodes;
use crate::graph::{AllowedUses, ForwardStar, Mode, ModeEncoding, NetworkView};
use crate::Error;

pub const PE_OK: c_int = 0;
pub const PE_NULL_POINTER: c_int = -1;
pub const PE_INVALID_INPUT: c_int = -2;
pub const PE_SOURCE_NOT_FOUND: c_int = -3;

pub struct PeNetwork {
    network: ForwardStar<f64>,
}

pub struct PeBuffers {
    buffers: SearchBuffers<f64>,
}

/// Views a C array; an empty array may be passed as null
unsafe fn array<'a, T>(ptr: *const T, len: usize) -> Option<&'a [T]> {
    if len == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    Some(slice::from_raw_parts(ptr, len))
}

unsafe fn index_slice(ptr: *const c_int, len: usize) -> Option<Vec<usize>> {
    array(ptr, len)?
        .iter()
        .map(|&v| usize::try_from(v).ok())
        .collect()
}

unsafe fn c_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Builds a network from forward-star arrays; returns null on invalid input
///
/// # Safety
/// Every pointer must reference an array of the documented length:
/// `node_size` for `first_link_from`/`last_link_from`, `link_size` for the rest.
/// Arrays of length zero may be null.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pe_network_new(
    node_size: c_int,
    link_size: c_int,
    from_node_no_arr: *const c_int,
    to_node_no_arr: *const c_int,
    first_link_from: *const c_int,
    last_link_from: *const c_int,
    sorted_link_no_arr: *const c_int,
    allowed_uses: *const *const c_char,
    link_cost: *const c_double,
    symbol_encoding: bool,
) -> *mut PeNetwork {
    let (Ok(nodes), Ok(links)) = (usize::try_from(node_size), usize::try_from(link_size)) else {
        return ptr::null_mut();
    };
    let (Some(use_texts), Some(cost)) = (array(allowed_uses, links), array(link_cost, links)) else {
        return ptr::null_mut();
    };

    let encoding = if symbol_encoding { ModeEncoding::Symbol } else { ModeEncoding::Token };
    let uses: Option<Vec<AllowedUses>> = use_texts
        .iter()
        .map(|&text| c_str(text).map(|t| AllowedUses::parse(t, encoding)))
        .collect();

    let parts = (
        index_slice(first_link_from, nodes),
        index_slice(last_link_from, nodes),
        index_slice(sorted_link_no_arr, links),
        index_slice(from_node_no_arr, links),
        index_slice(to_node_no_arr, links),
        uses,
    );
    let (Some(first), Some(last), Some(order), Some(from), Some(to), Some(uses)) = parts else {
        return ptr::null_mut();
    };
    match ForwardStar::from_parts(nodes, first, last, order, from, to, cost.to_vec(), uses) {
        Ok(network) => Box::into_raw(Box::new(PeNetwork { network })),
        Err(err) => {
            log::warn!("rejected network: {}", err);
            ptr::null_mut()
        }
    }
}

/// Replaces all link costs of a network
///
/// # Safety
/// `link_cost` must hold one entry per link of `net`.
#[no_mangle]
pub unsafe extern "C" fn pe_network_set_costs(
    net: *mut PeNetwork,
    link_cost: *const c_double,
) -> c_int {
    if net.is_null() {
        return PE_NULL_POINTER;
    }
    let net = &mut *net;
    let Some(cost) = array(link_cost, net.network.link_count()) else {
        return PE_NULL_POINTER;
    };
    match net.network.set_costs(cost.to_vec()) {
        Ok(()) => PE_OK,
        Err(_) => PE_INVALID_INPUT,
    }
}

/// # Safety
/// `net` must come from `pe_network_new` and not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn pe_network_free(net: *mut PeNetwork) {
    if !net.is_null() {
        drop(Box::from_raw(net));
    }
}

#[no_mangle]
pub extern "C" fn pe_buffers_new(node_size: c_int) -> *mut PeBuffers {
    let Ok(nodes) = usize::try_from(node_size) else {
        return ptr::null_mut();
    };
    Box::into_raw(Box::new(PeBuffers {
        buffers: SearchBuffers::new(nodes),
    }))
}

/// # Safety
/// `buffers` must come from `pe_buffers_new` and not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn pe_buffers_free(buffers: *mut PeBuffers) {
    if !buffers.is_null() {
        drop(Box::from_raw(buffers));
    }
}

/// Single-character mode search; nodes `>= first_thru_node` are thru nodes
///
/// Unreached nodes get `INT_MAX` as their label cost.
///
/// # Safety
/// Output arrays must hold one entry per node of `net`.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pe_shortest_path(
    net: *const PeNetwork,
    buffers: *mut PeBuffers,
    o_node_no: c_int,
    mode: c_char,
    departure_time: c_double,
    first_thru_node: c_int,
    label_cost: *mut c_double,
    node_pred: *mut c_int,
    link_pred: *mut c_int,
) -> c_int {
    let engine = LabelCorrecting::new()
        .with_mode(Mode::from_symbol(mode as u8 as char))
        .with_thru_nodes(ThruNodes::from_first_thru_node(first_thru_node.max(0) as usize))
        .with_start_cost(departure_time);
    run(&engine, net, buffers, o_node_no, label_cost, node_pred, link_pred)
}

/// Token mode search; nodes `<= last_thru_node` are thru nodes
///
/// # Safety
/// `mode` must be a NUL-terminated string and output arrays must hold one
/// entry per node of `net`.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pe_shortest_path_n(
    net: *const PeNetwork,
    buffers: *mut PeBuffers,
    o_node_no: c_int,
    mode: *const c_char,
    max_label_cost: c_double,
    last_thru_node: c_int,
    departure_time: c_double,
    label_cost: *mut c_double,
    node_pred: *mut c_int,
    link_pred: *mut c_int,
) -> c_int {
    let Some(mode) = c_str(mode) else {
        return PE_NULL_POINTER;
    };
    let Ok(mode) = Mode::from_token(mode) else {
        return PE_INVALID_INPUT;
    };
    // A negative boundary leaves only the origin expandable
    let thru_nodes = match usize::try_from(last_thru_node) {
        Ok(last) => ThruNodes::from_last_thru_node(last),
        Err(_) => ThruNodes::Range(0..0),
    };
    let engine = LabelCorrecting::new()
        .with_mode(mode)
        .with_thru_nodes(thru_nodes)
        .with_start_cost(departure_time)
        .with_max_label_cost(max_label_cost);
    run(&engine, net, buffers, o_node_no, label_cost, node_pred, link_pred)
}

unsafe fn run(
    engine: &LabelCorrecting<f64>,
    net: *const PeNetwork,
    buffers: *mut PeBuffers,
    o_node_no: c_int,
    label_cost: *mut c_double,
    node_pred: *mut c_int,
    link_pred: *mut c_int,
) -> c_int {
    if net.is_null() || buffers.is_null() {
        return PE_NULL_POINTER;
    }
    if label_cost.is_null() || node_pred.is_null() || link_pred.is_null() {
        return PE_NULL_POINTER;
    }
    let Ok(origin) = usize::try_from(o_node_no) else {
        return PE_SOURCE_NOT_FOUND;
    };
    let network = &(*net).network;
    let buffers = &mut (*buffers).buffers;

    match engine.run(network, origin, buffers) {
        Ok(_) => {}
        Err(Error::SourceNotFound) => return PE_SOURCE_NOT_FOUND,
        Err(_) => return PE_INVALID_INPUT,
    }

    let n = network.node_count();
    let to_c = |pred: &Option<usize>| pred.map_or(-1, |p| p as c_int);
    slice::from_raw_parts_mut(label_cost, n).copy_from_slice(buffers.label_costs());
    let node_out = slice::from_raw_parts_mut(node_pred, n);
    for (out, pred) in node_out.iter_mut().zip(buffers.node_predecessors()) {
        *out = to_c(pred);
    }
    let link_out = slice::from_raw_parts_mut(link_pred, n);
    for (out, pred) in link_out.iter_mut().zip(buffers.link_predecessors()) {
        *out = to_c(pred);
    }
    PE_OK
}
