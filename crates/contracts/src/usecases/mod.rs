pub mod u501_box_office_prediction;
