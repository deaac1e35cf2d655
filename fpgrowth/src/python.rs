//! Python bindings, built with the `python` feature.

use crate::config::MiningConfig;
use crate::error::MiningError;
use crate::fp::{fp_growth_algorithm, Item, TransactionSet};
use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

impl From<MiningError> for PyErr {
    fn from(err: MiningError) -> PyErr {
        match err {
            MiningError::Io { .. } => PyIOError::new_err(err.to_string()),
            MiningError::InvalidSupport(_) | MiningError::Parse { .. } => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

/// Mines item lists; returns `(sorted itemset, support count)` pairs in mining order.
#[pyfunction]
#[pyo3(name = "fp_growth", signature = (transactions, min_support, parallel = false))]
fn fp_growth_py(
    transactions: Vec<Vec<Item>>,
    min_support: f64,
    parallel: bool,
) -> PyResult<Vec<(Vec<Item>, usize)>> {
    let transactions = TransactionSet::from_transactions(transactions);
    let config = MiningConfig::new(min_support).with_parallel(parallel);
    let result = fp_growth_algorithm(&transactions, &config)?;

    Ok(result
        .itemsets
        .iter()
        .map(|(items, support)| (items.to_vec(), support))
        .collect())
}

/// Mines a dense 0/1 matrix; returns one `(n_itemsets, k)` array per itemset size `k`.
#[pyfunction]
#[pyo3(name = "fp_growth_dense")]
fn fp_growth_dense_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
) -> PyResult<Vec<Bound<'py, PyArray2<Item>>>> {
    let transactions = TransactionSet::from_dense(transactions.as_array());
    let result = fp_growth_algorithm(&transactions, &MiningConfig::new(min_support))?;

    let mut arrays = Vec::new();
    for level in result.itemsets.levels() {
        if level.is_empty() {
            continue;
        }

        let itemset_size = level.itemset_size;
        let data: Vec<Item> = level.iter_itemsets().flatten().copied().collect();
        let array = Array2::from_shape_vec((level.len(), itemset_size), data)
            .map_err(|_| PyValueError::new_err("Failed to create array"))?;
        arrays.push(array.into_pyarray_bound(py));
    }

    Ok(arrays)
}

#[pymodule]
fn fpgrowth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    m.add_function(wrap_pyfunction!(fp_growth_dense_py, m)?)?;
    Ok(())
}
