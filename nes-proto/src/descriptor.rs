//! USB descriptor tables for the NES adapter.

/// HID report descriptor: X/Y pointer axes 0-255, four buttons, four bits
/// of padding.
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Game Pad)
    0xA1, 0x01, // Collection (Application)
    0x09, 0x01, //   Usage (Pointer)
    0xA1, 0x00, //   Collection (Physical)
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x15, 0x00, //     Logical Minimum (0)
    0x26, 0xFF, 0x00, //     Logical Maximum (255)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0xC0, //   End Collection
    //
    // --- Buttons (A, B, Select, Start) ---
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (Button 1)
    0x29, 0x04, //   Usage Maximum (Button 4)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x04, //   Report Count (4)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Padding ---
    0x75, 0x01, //   Report Size (1)
    0x95, 0x04, //   Report Count (4)
    0x81, 0x03, //   Input (Constant, Variable, Absolute)
    0xC0, // End Collection
];

/// Product id the NES adapter enumerates with.
pub const PRODUCT_ID: u16 = 0x0a99;

/// USB device descriptor presenting the NES adapter as its own product.
///
/// Same as the firmware default apart from the product id.
pub const DEVICE_DESCRIPTOR: &[u8] = &[
    18,   // bLength
    1,    // bDescriptorType (Device)
    0x01, 0x01, // bcdUSB
    0x00, // bDeviceClass (per interface)
    0x00, // bDeviceSubClass
    0x00, // bDeviceProtocol
    8,    // bMaxPacketSize0
    0x09, 0x12, // idVendor (0x1209, pid.codes)
    PRODUCT_ID as u8, (PRODUCT_ID >> 8) as u8, // idProduct
    0x00, 0x01, // bcdDevice
    1,    // iManufacturer
    2,    // iProduct
    3,    // iSerialNumber
    1,    // bNumConfigurations
];
