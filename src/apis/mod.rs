pub mod usps;
