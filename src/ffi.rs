//! Python FFI bindings via PyO3.
//!
//! Exposes weights, posts and the mixer to Python. Policies other than the
//! default are reachable through the Rust API only.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from feed_mix import FeedMixer, Post, WeightEntry
//!
//! weights = WeightEntry("following", 0.5).add_children([
//!     WeightEntry("immediate-follow", 0.6),
//!     WeightEntry("follow-of-follow", 0.4),
//! ])
//! weights.append(WeightEntry("trending", 0.5))
//!
//! mixer = FeedMixer(weights)
//! feed = mixer.mix([Post("a", "trending"), Post("b", "following/immediate-follow")])
//! print([p.id for p in feed])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::mixer::FeedMixer as RustFeedMixer;
use crate::post::Post as RustPost;
use crate::weights::WeightEntry as RustWeightEntry;

// ── Post ──────────────────────────────────────────────────────────────────────

/// A feed post: stable id plus category path.
#[pyclass(name = "Post")]
#[derive(Clone)]
pub struct PyPost {
    inner: RustPost,
}

#[pymethods]
impl PyPost {
    /// Create a new Post.
    ///
    /// Args:
    ///     id:       stable identifier
    ///     category: category path, e.g. "top/daily"
    #[new]
    pub fn new(id: String, category: String) -> Self {
        Self {
            inner: RustPost::new(id, category),
        }
    }

    /// Post identifier.
    #[getter]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Category path.
    #[getter]
    pub fn category(&self) -> &str {
        &self.inner.category
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("Post(id={:?}, category={:?})", self.inner.id, self.inner.category)
    }

    /// Python equality comparison.
    pub fn __eq__(&self, other: &PyPost) -> bool {
        self.inner == other.inner
    }
}

// ── WeightEntry ───────────────────────────────────────────────────────────────

/// A (category path, ratio) pair.
#[pyclass(name = "WeightEntry")]
#[derive(Clone)]
pub struct PyWeightEntry {
    inner: RustWeightEntry,
}

#[pymethods]
impl PyWeightEntry {
    /// Create a new WeightEntry. The ratio is not validated.
    #[new]
    pub fn new(category: String, ratio: f64) -> Self {
        Self {
            inner: RustWeightEntry::new(category, ratio),
        }
    }

    /// Category path.
    #[getter]
    pub fn category(&self) -> &str {
        &self.inner.category
    }

    /// Ratio.
    #[getter]
    pub fn ratio(&self) -> f64 {
        self.inner.ratio
    }

    /// Expand this entry against children, one level deep.
    ///
    /// Returns a new list of entries named "parent/child" with ratio
    /// parent.ratio * child.ratio, in the children's order.
    pub fn add_children(&self, children: Vec<PyWeightEntry>) -> Vec<PyWeightEntry> {
        let children: Vec<RustWeightEntry> = children.into_iter().map(|c| c.inner).collect();
        self.inner
            .add_children(&children)
            .into_iter()
            .map(|inner| PyWeightEntry { inner })
            .collect()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "WeightEntry(category={:?}, ratio={})",
            self.inner.category, self.inner.ratio
        )
    }
}

// ── FeedMixer ─────────────────────────────────────────────────────────────────

/// Quota-respecting, order-preserving feed mixer.
///
/// Example::
///
///     mixer = FeedMixer([WeightEntry("a", 0.5), WeightEntry("b", 0.5)])
///     feed = mixer.mix(posts)
#[pyclass(name = "FeedMixer", frozen)]
pub struct PyFeedMixer {
    inner: RustFeedMixer,
}

#[pymethods]
impl PyFeedMixer {
    /// Build a mixer from a list of WeightEntry.
    ///
    /// Raises:
    ///     ValueError: if the list is empty
    #[new]
    pub fn new(weights: Vec<PyWeightEntry>) -> PyResult<Self> {
        let weights = weights.into_iter().map(|w| w.inner).collect();
        let inner =
            RustFeedMixer::new(weights).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Mix posts into a feed, preserving their relative order.
    pub fn mix(&self, posts: Vec<PyPost>) -> Vec<PyPost> {
        self.inner
            .select(&posts.iter().map(|p| &p.inner).collect::<Vec<_>>())
            .into_iter()
            .map(|i| posts[i].clone())
            .collect()
    }

    /// Number of distinct configured categories.
    pub fn __len__(&self) -> usize {
        self.inner.table().len()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("FeedMixer(categories={})", self.inner.table().len())
    }
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Python module `feed_mix`: quota-respecting feed mixing.
#[pymodule]
pub fn feed_mix(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPost>()?;
    m.add_class::<PyWeightEntry>()?;
    m.add_class::<PyFeedMixer>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
