//! Circom constant-table emission.
//!
//! An external circuit recomputes the hash from the same parameter set; this
//! module renders that set as a Circom source string with lookup functions
//! for the round count, state width, alpha, the MDS matrix and the flattened
//! round constants. It only reads the public parameter accessors and
//! produces text; writing a file is left to the caller.

use crate::params::RescuePrimeParams;

pub fn circom_constants(params: &RescuePrimeParams) -> String {
    let m = params.state_width();
    let mut out = String::from("pragma circom 2.0.0;\n\n");

    out.push_str(&format!(
        "function getRounds() {{\n    return {};\n}}\n\n",
        params.number_of_rounds()
    ));
    out.push_str(&format!(
        "function getM() {{\n    return {};\n}}\n\n",
        m
    ));
    out.push_str(&format!(
        "function getAlpha() {{\n    return {};\n}}\n\n",
        params.alpha()
    ));

    out.push_str(&format!(
        "function getMDS(i, j) {{\n    var MDS[{}][{}];\n",
        m, m
    ));
    for (i, row) in params.mds_matrix().iter().enumerate() {
        for (j, el) in row.iter().enumerate() {
            out.push_str(&format!("    MDS[{}][{}] = {};\n", i, j, el));
        }
    }
    out.push_str("    return MDS[i][j];\n}\n\n");

    let constants = params.round_constants();
    out.push_str(&format!(
        "function getRoundConstant(k) {{\n    var RC[{}];\n",
        constants.len()
    ));
    for (k, el) in constants.iter().enumerate() {
        out.push_str(&format!("    RC[{}] = {};\n", k, el));
    }
    out.push_str("    return RC[k];\n}\n");

    out
}
