mod poisson_disc;

pub use poisson_disc::PoissonDiscSampler;
