pub mod vegetable_data;
