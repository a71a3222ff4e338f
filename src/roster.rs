use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Entity, WalletInfo};

/// Token universe for the synthetic generator and reference pricing.
pub const TOKENS: &[&str] = &[
    "BTC", "ETH", "SOL", "ARB", "DOGE", "AVAX", "LINK", "OP", "APT", "SUI",
];

/// Reference mark prices used when synthesizing positions.
pub fn token_price(token: &str) -> Decimal {
    match token {
        "BTC" => dec!(95000),
        "ETH" => dec!(3200),
        "SOL" => dec!(180),
        "ARB" => dec!(0.85),
        "DOGE" => dec!(0.32),
        "AVAX" => dec!(35),
        "LINK" => dec!(22),
        "OP" => dec!(1.8),
        "APT" => dec!(8.5),
        "SUI" => dec!(3.2),
        _ => Decimal::ONE,
    }
}

fn wallet(
    address: &str,
    label: &str,
    entity: Entity,
    account_value: Decimal,
    roi: Decimal,
    total_pnl: Decimal,
) -> WalletInfo {
    WalletInfo {
        address: address.into(),
        label: label.into(),
        entity,
        account_value,
        roi,
        total_pnl,
    }
}

/// The static whale roster. Immutable reference data; the leaderboard seeder
/// may append to a copy of this list at startup but nothing mutates it at
/// runtime.
#[rustfmt::skip]
pub fn whale_roster() -> Vec<WalletInfo> {
    use Entity::*;
    vec![
        wallet("0xffbd3e51ae0e2c4407434e157965c064f2a11628", "Trading Bot [0xffbd3e]", Retail, dec!(34792137.22), dec!(0.03), dec!(767452.49)),
        wallet("0xfce053a5e461683454bf37ad66d20344c0e3f4c0", "Smart HL Perps Trader", Retail, dec!(3879232.68), dec!(0.02), dec!(415587.99)),
        wallet("0xfc667adba8d4837586078f4fdcdc29804337ca06", "Bridge User [0xfc667a]", Retail, dec!(28196371.28), dec!(0.02), dec!(1154648.28)),
        wallet("0xecb63caa47c7c4e77f60f1ce858cf28dc2b82b00", "Wintermute Market Making", MarketMaker, dec!(43353163.27), dec!(0.00), dec!(5103131.64)),
        wallet("0xea6670ebdb4a388a8cfc16f6497bf4f267b061ee", "Smart HL Perps Trader", Retail, dec!(11546661.75), dec!(0.54), dec!(1036133.21)),
        wallet("0xcac19662ec88d23fa1c81ac0e8570b0cf2ff26b3", "Galaxy Digital", Vc, dec!(17181889.44), dec!(0.18), dec!(6671819.44)),
        wallet("0x7fdafde5cfb5465924316eced2d3715494c517d1", "Fasanara Capital", Vc, dec!(47298990.58), dec!(0.11), dec!(7436920.51)),
        wallet("0x621c5551678189b9a6c94d929924c225ff1d63ab", "Fasanara Capital 2", Vc, dec!(61814094.23), dec!(0.10), dec!(8095502.41)),
        wallet("0xd47587702a91731dc1089b5db0932cf820151a91", "Dex Trader [0xd47587]", Retail, dec!(53954916.83), dec!(0.01), dec!(457468.62)),
        wallet("0x880ac484a1743862989a441d6d867238c7aa311c", "High Activity Whale", Retail, dec!(31485024.97), dec!(0.02), dec!(12011879.59)),
        wallet("0x856c35038594767646266bc7fd68dc26480e910d", "Whale [0x856c35]", Retail, dec!(30821037.25), dec!(0.02), dec!(1826981.90)),
        wallet("0x94d3735543ecb3d339064151118644501c933814", "Whale [0x94d373]", Retail, dec!(32285798.04), dec!(0.00), dec!(1406291.17)),
        wallet("0xb83de012dba672c76a7dbbbf3e459cb59d7d6e36", "Abraxas Capital", Retail, dec!(20865656.14), dec!(0.38), dec!(6717386.21)),
        wallet("0xa312114b5795dff9b8db50474dd57701aa78ad1e", "Smart HL Perps Trader", Retail, dec!(21932601.62), dec!(0.06), dec!(5256448.78)),
        wallet("0x8e096995c3e4a3f0bc5b3ea1cba94de2aa4d70c9", "High Activity Trader", Retail, dec!(17806910.37), dec!(0.06), dec!(4200591.68)),
        wallet("0xf9109ada2f73c62e9889b45453065f0d99260a2d", "Whale [0xf9109a]", Retail, dec!(16729817.00), dec!(0.00), dec!(358610.44)),
        wallet("0x985f02b19dbc062e565c981aac5614baf2cf501f", "Whale [0x985f02]", Retail, dec!(14943925.14), dec!(0.00), dec!(1062398.78)),
        wallet("0x9c89f595f5515609ad61f6fda94beff85ae6600e", "Token Millionaire", Retail, dec!(11909720.97), dec!(0.05), dec!(155086.18)),
        wallet("0x8ae4c5b303bc77c3aa68f2b71f37c9fa6d3b3d60", "Former Smart Trader", Retail, dec!(11142560.66), dec!(0.46), dec!(268215.00)),
        wallet("0x76c2164fc79492401db1890db0d17d16b9155aa0", "Bridge User [0x76c216]", Retail, dec!(9591882.83), dec!(0.36), dec!(3942621.86)),
        wallet("0x8cc94dc843e1ea7a19805e0cca43001123512b6a", "Token Millionaire", Retail, dec!(7831178.15), dec!(0.00), dec!(120637.82)),
        wallet("0xd911e53d53b663972254e086450fd6198a25961e", "Whale [0xd911e5]", Retail, dec!(7704711.31), dec!(0.07), dec!(357503.34)),
        wallet("0x7717a7a245d9f950e586822b8c9b46863ed7bd7e", "Trading Bot", Retail, dec!(7434084.20), dec!(0.00), dec!(243183.87)),
        wallet("0x5bc43f38c2ddcd85857f218674cd384f172c3b0c", "High Balance", Retail, dec!(7346256.78), dec!(0.01), dec!(189353.88)),
        wallet("0x8def9f50456c6c4e37fa5d3d57f108ed23992dae", "Laurent Zeimes", Retail, dec!(7255082.42), dec!(0.02), dec!(501607.15)),
        wallet("0xb8eb97eaed8367079894d2f1bed69bd220ec1dd5", "Whale [0xb8eb97]", Retail, dec!(6796652.34), dec!(0.12), dec!(229649.52)),
        wallet("0xd4c1f7e8d876c4749228d515473d36f919583d1d", "Bridge User", Retail, dec!(6464055.99), dec!(0.00), dec!(438780.30)),
        wallet("0x7ca165f354e3260e2f8d5a7508cc9dd2fa009235", "Smart Trader", Retail, dec!(6016296.32), dec!(0.06), dec!(625393.23)),
        wallet("0xc613bd93c62e62bf3e583c36ae8c4118f1fb2456", "Token Millionaire", Retail, dec!(5865412.69), dec!(0.03), dec!(931046.80)),
        wallet("0x720a68bf0813853cd3ed74d2fd0f54edfc7a43e1", "Trading Bot", Retail, dec!(5482787.23), dec!(0.05), dec!(234718.34)),
    ]
}
