use bt_hci::controller::ExternalController;
use esp_hal::peripherals::BT;
use esp_radio::ble::controller::BleConnector;
use static_cell::make_static;

/// HCI command slots shared with the radio
const HCI_SLOTS: usize = 20;

pub(crate) type BleController = ExternalController<BleConnector<'static>, HCI_SLOTS>;

/// Bring up the radio and wrap its BLE connector into an HCI controller
pub(crate) fn init_ble_controller(bt: BT<'static>) -> BleController {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().expect("radio init failed"));
    let connector = BleConnector::new(esp_radio_ctrl, bt, Default::default())
        .expect("BLE connector init failed");

    ExternalController::new(connector)
}
