//! Coordinate-aware elementwise mapping

use crate::error::Result;
use crate::tensor::Tensor;

impl Tensor {
    /// Rebuild every element from its value and logical coordinates
    ///
    /// Visits logical elements in row-major order and replaces each with
    /// `f(value, location)`, where `location` carries one index per
    /// dimension. The closure may capture arbitrary state. Padding cells
    /// are never visited and never passed to `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use tensr::Tensor;
    ///
    /// let zeros = Tensor::zeros(&[2, 3]).unwrap();
    /// let coded = zeros.map(|v, loc| v + (loc[0] * 10 + loc[1]) as f32).unwrap();
    /// assert_eq!(coded.to_vec(), vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
    /// ```
    pub fn map<F>(&self, mut f: F) -> Result<Tensor>
    where
        F: FnMut(f32, &[usize]) -> f32,
    {
        let mut out = self.try_clone()?;
        let layout = self.layout();
        let row_len = layout.row_len();
        let stride = layout.row_stride();

        // One scratch location reused across all elements.
        let mut location = vec![0usize; layout.ndim()];

        let out_buf = out.buf_mut();
        for row in 0..layout.rows() {
            let base = row * stride;
            for col in 0..row_len {
                layout.locate(row * row_len + col, &mut location);
                let cell = &mut out_buf[base + col];
                *cell = f(*cell, &location);
            }
        }

        Ok(out)
    }
}
