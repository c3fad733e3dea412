use std::fmt;

/// Dense f32 tensor laid out as batch, height, width, channel.
#[derive(Clone, PartialEq)]
pub struct ImageTensor {
    shape: [usize; 4],
    data: Vec<f32>,
}

impl ImageTensor {
    /// Returns `None` when `data` does not fill `shape` exactly.
    pub fn new(shape: [usize; 4], data: Vec<f32>) -> Option<Self> {
        if shape.iter().product::<usize>() != data.len() {
            return None;
        }
        Some(Self { shape, data })
    }

    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[cfg(test)]
    pub fn get(&self, batch: usize, y: usize, x: usize, c: usize) -> Option<f32> {
        let [b, h, w, ch] = self.shape;
        if batch >= b || y >= h || x >= w || c >= ch {
            return None;
        }
        self.data.get(((batch * h + y) * w + x) * ch + c).copied()
    }
}

impl fmt::Debug for ImageTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageTensor")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}
