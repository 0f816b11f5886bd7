// Responses recorded from a Bonk's Adventure board.
//
// The boot-time protection sub-commands $30-$34 use descriptor parameters whose data can't be
// located in the data ROM, so the MCU output is reproduced verbatim. Sub-command $30 is the only
// response with an odd length on hardware (655 bytes); the table is padded to a whole word.

// Command $43: factory settings, written straight to EEPROM whenever the stored settings are corrupt
#[rustfmt::skip]
pub const FACTORY_SETTINGS: [u16; 64] = [
    0x8BE0, 0x8E71, 0x0102, 0x0102, 0x0300, 0x010C, 0x0202, 0x0202,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0030, 0x0020, 0x4F6B, 0x0305, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0082, 0x6F82, 0x628C, 0xB490, 0x6CAB,
];

// Sub-command $34: 68000 code (a run of MOVEQs followed by RTS), copied to $200E00
#[rustfmt::skip]
pub const SUBCOMMAND_34: [u16; 9] = [
    0x7071, 0x7273, 0x7475, 0x7677, 0x7879, 0x7A7B, 0x7C7D, 0x7E7F,
    0x4E75,
];

// Sub-command $32: 128 bytes, copied to $200180
#[rustfmt::skip]
pub const SUBCOMMAND_32: [u16; 64] = [
    0x00CC, 0xCC0C, 0xC0C0, 0xC080, 0x0484, 0xB6A6, 0x0404, 0x80C0,
    0x80B1, 0xB1A1, 0xA1B2, 0xA2B3, 0xB3A3, 0xA3B1, 0xB1B1, 0xB1C0,
    0xC0A1, 0xA1A1, 0xA1B2, 0xB2A2, 0xA290, 0x9090, 0xB9B9, 0xA9A9,
    0xBAAA, 0xBBBB, 0xABAB, 0xB9B9, 0xB9B9, 0xC8C8, 0xA9A9, 0xA9A9,
    0xBABA, 0xAAAA, 0x9898, 0x98B9, 0xB9A9, 0xA9BA, 0xAABB, 0xBBAB,
    0xABB9, 0xB9B9, 0xB9C8, 0xC8A9, 0xA9A9, 0xA9BA, 0xBAAA, 0xAA98,
    0x9898, 0xB1B1, 0xA1A1, 0xB2A2, 0xB3B3, 0xA3A3, 0xB1B1, 0xB1B1,
    0xC0C0, 0xA1A1, 0xA1A1, 0xB2B2, 0xA2A2, 0x9090, 0x9000, 0x0000,
];

// Sub-command $31: 112 bytes, copied to $200280
#[rustfmt::skip]
pub const SUBCOMMAND_31: [u16; 56] = [
    0x1013, 0x1411, 0x1216, 0x1519, 0x1A17, 0x1824, 0x2322, 0x211F,
    0x201E, 0x1D1C, 0x1B27, 0x2825, 0x2629, 0x2A2B, 0x2E2F, 0x2C2D,
    0x3130, 0x3435, 0x3233, 0x3F3E, 0x3D3C, 0x3A3B, 0x3938, 0x3736,
    0x4243, 0x4041, 0x4445, 0x4649, 0x4A47, 0x484C, 0x4B4F, 0x504D,
    0x4E5A, 0x5958, 0x5755, 0x5654, 0x5352, 0x515D, 0x5E5B, 0x5C5F,
    0x6061, 0x6465, 0x6263, 0x6766, 0x6A6B, 0x6869, 0x7574, 0x7372,
    0x7071, 0x6F6E, 0x6D6C, 0x7879, 0x7677, 0x7A7B, 0x7C7D, 0x7E7F,
];

// Sub-command $30: 655 bytes, copied to $200E50
#[rustfmt::skip]
pub const SUBCOMMAND_30: [u16; 328] = [
    0x8C00, 0x9700, 0xA000, 0xA700, 0xB200, 0xB700, 0xC000, 0xCC00,
    0xD600, 0xDF00, 0xEF00, 0xF500, 0xFD00, 0x0501, 0x0B01, 0x1801,
    0x1E01, 0x2901, 0x3101, 0x3701, 0x4101, 0x4901, 0x0B01, 0x5D01,
    0xA700, 0xB200, 0x6C01, 0x8101, 0xB200, 0x8101, 0x8101, 0x8101,
    0x8101, 0x8101, 0x8101, 0x8101, 0x8101, 0x8101, 0x8101, 0x8101,
    0x8101, 0x8101, 0x8101, 0x8101, 0x8101, 0x8101, 0x8101, 0x8101,
    0x8101, 0x8101, 0x8101, 0x8101, 0x8101, 0x8101, 0x8101, 0x2E02,
    0x3602, 0x3D02, 0x4102, 0x4F02, 0x5502, 0x5502, 0x5F02, 0x6402,
    0x6D02, 0x7302, 0x7802, 0x7D02, 0x8302, 0x8A02, 0x0165, 0x712B,
    0x57FE, 0x57A2, 0xFF00, 0x0003, 0x7C3A, 0x436C, 0x66FF, 0x0000,
    0x026C, 0x6D43, 0xFF00, 0x0000, 0x74A5, 0x8373, 0x3599, 0x9FFF,
    0x0000, 0x074A, 0xFF00, 0x0002, 0x8788, 0x3331, 0x32FF, 0x0000,
    0x0276, 0x8C71, 0x2D8C, 0xFE12, 0x8CFF, 0x0000, 0x0171, 0x0D29,
    0xFE0D, 0x29FF, 0x0000, 0x0559, 0x5A5B, 0x8A8B, 0xFF00, 0x0003,
    0x0D0E, 0x576A, 0x641E, 0xFE0D, 0x0EFE, 0x64A3, 0xFF00, 0x0006,
    0x0262, 0xFF00, 0x0007, 0x3E3F, 0x7A7B, 0xFF00, 0x0007, 0x7584,
    0x4C53, 0xFF00, 0x0001, 0x6645, 0xFF00, 0x0007, 0x0D18, 0x2984,
    0x5384, 0xFE0D, 0x29FF, 0x0000, 0x0457, 0x5CFF, 0x0000, 0x0751,
    0x5202, 0x45FE, 0x4575, 0xFF00, 0x0000, 0x191A, 0x1B6E, 0xFF00,
    0x0006, 0x3472, 0xFF00, 0x0000, 0x6569, 0x090F, 0x8B23, 0xFF00,
    0x0004, 0x3B3C, 0x3D79, 0xFF00, 0x0080, 0x770A, 0x8176, 0x2A65,
    0x64FE, 0x7776, 0xFE2A, 0x76FE, 0x650A, 0xFF00, 0x0000, 0x1011,
    0x1226, 0x2728, 0xA655, 0x940F, 0x68FF, 0x0000, 0x8045, 0x6477,
    0x0A81, 0x762A, 0x65FE, 0x7776, 0xFE2A, 0x76FE, 0x650A, 0xFF00,
    0x0000, 0x166B, 0xFF00, 0x0007, 0x1E30, 0x39FF, 0x0000, 0x0345,
    0x3A77, 0x7843, 0x4647, 0xFF00, 0x0000, 0x7335, 0x8399, 0x9FFF,
    0x0000, 0x0237, 0x38FF, 0x0000, 0x0044, 0x303B, 0xFF00, 0x0000,
    0x7D7E, 0x7FA1, 0x0AFF, 0x0000, 0x0070, 0xFF00, 0x0000, 0x3E3F,
    0x7A7B, 0x6180, 0x89A4, 0xFF00, 0x0006, 0x86A5, 0x4F42, 0xFF00,
    0x0000, 0x1011, 0x1255, 0x0F68, 0xFF00, 0x0002, 0x8788, 0x4033,
    0xFF00, 0x0005, 0x650F, 0xFF00, 0x0008, 0x9596, 0x9BA7, 0xFF00,
    0x0000, 0x4849, 0x82FF, 0x0000, 0x022E, 0x2F30, 0xFF00, 0x0001,
    0x7778, 0x5826, 0x2728, 0xA6FF, 0x0000, 0x0813, 0x1402, 0x51FF,
    0x0000, 0x072E, 0x5C5D, 0xFF00, 0x0006, 0x57FF, 0x0000, 0x0230,
    0x391E, 0x65FE, 0x6530, 0xFF00, 0x0000, 0x4BFF, 0x0000, 0x008E,
    0x8F90, 0x91FF, 0x0000, 0x0092, 0x9D17, 0xFF00, 0x0000, 0xFF00,
    0x0000, 0x8D9B, 0xA77D, 0x7E7F, 0xA10A, 0x9596, 0xFF00, 0x0001,
    0x1993, 0xFF00, 0x0000, 0x67FF, 0x0000, 0x0067, 0xFF00, 0x0000,
    0x27FF, 0x0000, 0x0390, 0x8E23, 0x978B, 0xFF00, 0x0000, 0x1D9E,
    0xFF00, 0x0007, 0x3BFF, 0x0000, 0x001D, 0xFF00, 0x0000, 0x8E90,
    0xFF00, 0x0005, 0x2495, 0x96FF, 0x0000, 0x009A, 0xFF00, 0x0000,
];

// Sub-command $33: 2560 bytes, copied to $200400. The 32 zero bytes after every 32 bytes of data
// are really written by the MCU
#[rustfmt::skip]
pub const SUBCOMMAND_33: [u16; 1280] = [
    0x00A4, 0x0001, 0x00A5, 0x005A, 0x00A6, 0x0074, 0x00A7, 0x009B,
    0x00A8, 0x00D0, 0x00A9, 0x00FE, 0x00AA, 0x015D, 0x00AB, 0x01B0,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0001, 0x0002, 0x0019, 0x005B, 0x0022, 0x0075, 0x002D, 0x009C,
    0x0041, 0x00D1, 0x004E, 0x00FF, 0x0060, 0x015F, 0x0072, 0x01B1,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0002, 0x0008, 0x001A, 0x0061, 0x0023, 0x007B, 0x002E, 0x00A2,
    0x0042, 0x00D7, 0x004F, 0x0107, 0x0061, 0x0165, 0x0073, 0x01B7,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x000A, 0x0000, 0x0063, 0x0000, 0x007D, 0x0000, 0x00A4,
    0x0000, 0x00D9, 0x0000, 0x0109, 0x0000, 0x0167, 0x0000, 0x01B9,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0003, 0x000B, 0x001B, 0x0064, 0x0024, 0x007E, 0x002F, 0x00A5,
    0x0043, 0x00DA, 0x0050, 0x010A, 0x0062, 0x0168, 0x0074, 0x01BA,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x000C, 0x0000, 0x0065, 0x0000, 0x007F, 0x0000, 0x00A6,
    0x0000, 0x00DB, 0x0000, 0x010B, 0x0000, 0x0169, 0x0000, 0x01BB,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0004, 0x0008, 0x001C, 0x0061, 0x0025, 0x007B, 0x0030, 0x00A2,
    0x0044, 0x00D7, 0x0051, 0x0107, 0x0063, 0x0165, 0x0075, 0x01B7,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0005, 0x000D, 0x001D, 0x0066, 0x0025, 0x007B, 0x0031, 0x00A7,
    0x0045, 0x00DC, 0x0051, 0x0107, 0x0063, 0x0165, 0x0075, 0x01B7,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0017, 0x0000, 0x0069, 0x0000, 0x0089, 0x0000, 0x00AF,
    0x0000, 0x00DF, 0x0000, 0x0115, 0x0000, 0x0173, 0x0000, 0x01C5,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0009, 0x0015, 0x001E, 0x0067, 0x0029, 0x0087, 0x0034, 0x00AD,
    0x0046, 0x00DD, 0x0055, 0x0113, 0x0067, 0x0171, 0x0079, 0x01C3,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0006, 0x000E, 0x0006, 0x000E, 0x0026, 0x0080, 0x0006, 0x000E,
    0x0000, 0x0000, 0x0052, 0x010C, 0x0064, 0x016A, 0x0076, 0x01BC,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0007, 0x0010, 0x0007, 0x0010, 0x0027, 0x0082, 0x0032, 0x00A8,
    0x0000, 0x0000, 0x0053, 0x010E, 0x0065, 0x016C, 0x0077, 0x01BE,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0013, 0x0000, 0x0013, 0x0000, 0x0085, 0x0000, 0x00AB,
    0x0000, 0x0000, 0x0000, 0x0111, 0x0000, 0x016F, 0x0000, 0x01C1,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0008, 0x0014, 0x0008, 0x0014, 0x0028, 0x0086, 0x0033, 0x00AC,
    0x0000, 0x0000, 0x0054, 0x0112, 0x0066, 0x0170, 0x0078, 0x01C2,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0018, 0x0000, 0x006A, 0x0000, 0x008A, 0x0000, 0x00B0,
    0x0000, 0x00E0, 0x0000, 0x0116, 0x0000, 0x0174, 0x0000, 0x01C6,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x000C, 0x0000, 0x0065, 0x0000, 0x007F, 0x0000, 0x00A6,
    0x0000, 0x00DB, 0x0000, 0x010B, 0x0000, 0x0169, 0x0000, 0x01BB,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x000A, 0x0019, 0x001F, 0x006B, 0x002A, 0x008B, 0x0035, 0x00B1,
    0x0047, 0x00E1, 0x0056, 0x0117, 0x0068, 0x0175, 0x007A, 0x01C7,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x000B, 0x0019, 0x0020, 0x006B, 0x002B, 0x008B, 0x0036, 0x00B1,
    0x0048, 0x00E1, 0x0057, 0x0117, 0x0069, 0x0175, 0x007A, 0x01C7,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0015, 0x003E, 0x0015, 0x003E, 0x0099, 0x0095, 0x0015, 0x003E,
    0x0000, 0x0000, 0x009E, 0x013A, 0x006D, 0x018F, 0x007E, 0x01DC,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x000C, 0x001D, 0x000C, 0x001D, 0x000C, 0x001D, 0x000C, 0x001D,
    0x0049, 0x00E5, 0x0058, 0x011B, 0x006A, 0x0179, 0x007B, 0x01C9,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x001F, 0x0000, 0x001F, 0x0000, 0x001F, 0x0000, 0x001F,
    0x0000, 0x00E7, 0x0000, 0x011D, 0x0000, 0x017B, 0x0000, 0x01CB,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x000D, 0x0020, 0x0021, 0x006F, 0x002C, 0x008F, 0x0037, 0x00B5,
    0x004A, 0x00E8, 0x0059, 0x011E, 0x006B, 0x017C, 0x007C, 0x01CC,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0022, 0x0000, 0x0071, 0x0000, 0x0091, 0x0000, 0x00B7,
    0x0000, 0x00EA, 0x0000, 0x0120, 0x0000, 0x017E, 0x0000, 0x01CE,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0014, 0x003B, 0x0014, 0x003B, 0x005D, 0x0092, 0x0014, 0x003B,
    0x0014, 0x003B, 0x009D, 0x0137, 0x00A0, 0x018C, 0x00A1, 0x01D9,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0012, 0x0036, 0x0012, 0x0036, 0x0012, 0x0036, 0x0012, 0x0036,
    0x008A, 0x00E5, 0x00BE, 0x013C, 0x006C, 0x0184, 0x007D, 0x01D1,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0013, 0x0038, 0x0013, 0x0038, 0x0013, 0x0038, 0x0013, 0x0038,
    0x008A, 0x00E5, 0x00BF, 0x013D, 0x006C, 0x0184, 0x007D, 0x01D1,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0038, 0x00BA, 0x0038, 0x00BA, 0x0038, 0x00BA, 0x0038, 0x00BA,
    0x0038, 0x00BA, 0x00A2, 0x0128, 0x006E, 0x019C, 0x007F, 0x01E7,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x005C, 0x014D, 0x005C, 0x014D, 0x005C, 0x014D, 0x005C, 0x014D,
    0x0000, 0x0000, 0x009C, 0x0124, 0x0071, 0x01A5, 0x0082, 0x01F0,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x005B, 0x014D, 0x005B, 0x014D, 0x005B, 0x014D, 0x005B, 0x014D,
    0x0000, 0x0000, 0x009B, 0x0124, 0x0070, 0x01A1, 0x0081, 0x01EC,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0044, 0x0000, 0x0044, 0x0000, 0x0044, 0x0000, 0x0044,
    0x0000, 0x00DB, 0x0000, 0x010B, 0x0000, 0x0169, 0x0000, 0x01BB,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0018, 0x0045, 0x0018, 0x0045, 0x0018, 0x0045, 0x0018, 0x0045,
    0x0044, 0x00D7, 0x0051, 0x0107, 0x0063, 0x0165, 0x0075, 0x01B7,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x008B, 0x000E, 0x008B, 0x000E, 0x008C, 0x0080, 0x008B, 0x000E,
    0x0000, 0x0000, 0x008D, 0x010C, 0x008E, 0x016A, 0x008F, 0x01BC,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0090, 0x0010, 0x0090, 0x0010, 0x0091, 0x0082, 0x0092, 0x00A8,
    0x0000, 0x0000, 0x0093, 0x010E, 0x0094, 0x016C, 0x0095, 0x01BE,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0096, 0x003E, 0x0096, 0x003E, 0x009A, 0x0095, 0x0096, 0x003E,
    0x0000, 0x0000, 0x009F, 0x013A, 0x0097, 0x018F, 0x0098, 0x01DC,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0049, 0x0000, 0x0069, 0x0000, 0x0098, 0x0000, 0x00AF,
    0x0000, 0x00DF, 0x0000, 0x0145, 0x0000, 0x0173, 0x0000, 0x01C5,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x005E, 0x0048, 0x005F, 0x0068, 0x006F, 0x0097, 0x0080, 0x00AE,
    0x00AC, 0x00DE, 0x00AD, 0x0144, 0x00AE, 0x0172, 0x00AF, 0x01C4,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x004B, 0x00ED, 0x004B, 0x00ED, 0x004B, 0x00ED, 0x004B, 0x00ED,
    0x004B, 0x00ED, 0x00B0, 0x012B, 0x00B6, 0x0186, 0x00BA, 0x01D3,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0087, 0x00F2, 0x0087, 0x00F2, 0x0087, 0x00F2, 0x0087, 0x00F2,
    0x0087, 0x00F2, 0x00B3, 0x0130, 0x00B8, 0x018B, 0x00BC, 0x01D8,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x00C1, 0x0050, 0x00C1, 0x0050, 0x00C1, 0x0050, 0x00C1, 0x0050,
    0x00C1, 0x0050, 0x00C3, 0x0148, 0x00C5, 0x019A, 0x00C7, 0x01E5,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x00C2, 0x0050, 0x00C2, 0x0050, 0x00C2, 0x0050, 0x00C2, 0x0050,
    0x00C2, 0x0050, 0x00C4, 0x0148, 0x00C6, 0x019A, 0x00C8, 0x01E5,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];
