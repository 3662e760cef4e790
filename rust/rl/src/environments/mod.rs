pub mod grid_adapter;
